use log::warn;

use crate::expression::Expression;
use crate::parser::tokenizer::Token;

/// Read one expression from the front of `tokens`, returning it together with
/// the unconsumed remainder.
///
/// Parsing is lenient: a group left open at the end of input is closed
/// silently with whatever children were collected, and a stray `)` in head
/// position becomes an ordinary atom. An empty token slice yields `None`.
pub fn parse<'t, 'a>(tokens: &'t [Token<'a>]) -> (Option<Expression>, &'t [Token<'a>]) {
    let Some((token, mut rest)) = tokens.split_first() else {
        return (None, tokens);
    };

    match token {
        Token::LeftParen => {
            let mut items = Vec::new();
            loop {
                match rest.split_first() {
                    Some((Token::RightParen, after)) => {
                        rest = after;
                        break;
                    }
                    Some(_) => {
                        let (item, after) = parse(rest);
                        if let Some(item) = item {
                            items.push(item);
                        }
                        rest = after;
                    }
                    None => {
                        warn!("Input ended inside an unclosed group; closing it implicitly");
                        break;
                    }
                }
            }
            (Some(Expression::List(items)), rest)
        }
        other => (Some(Expression::atom(other.text())), rest),
    }
}
