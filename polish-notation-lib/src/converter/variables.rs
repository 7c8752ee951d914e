use crate::converter::error::LexError;
use crate::converter::lexer::tokenize;
use crate::converter::token::Token;
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Memoizes extraction results by exact input string. Purely an
/// optimization: a hit returns the same value a fresh tokenization would.
static CACHE: OnceLock<Mutex<HashMap<String, Vec<String>>>> = OnceLock::new();

const CACHE_CAPACITY: usize = 256;

/// Collects the unique identifier names of an expression, sorted
/// lexicographically.
///
/// # Arguments
///
/// * `expression`: The text-representation of an infix expression.
///
/// returns: The sorted, deduplicated variable names.
///
/// # Examples
///
/// ```
/// use polish_notation::converter::variables::extract_variables;
///
/// let variables = extract_variables("Z + A + M")?;
/// assert_eq!(variables, vec!["A", "M", "Z"]);
/// # Ok::<(), polish_notation::converter::error::LexError>(())
/// ```
pub fn extract_variables(expression: &str) -> Result<Vec<String>, LexError> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    if let Ok(guard) = cache.lock() {
        if let Some(variables) = guard.get(expression) {
            return Ok(variables.clone());
        }
    }

    let tokens = tokenize(expression)?;
    let variables: Vec<String> = tokens
        .into_iter()
        .filter_map(|token| match token {
            Token::Identifier(name) => Some(name),
            _ => None,
        })
        .unique()
        .sorted()
        .collect();

    if let Ok(mut guard) = cache.lock() {
        // A full flush keeps the map bounded without any bookkeeping.
        if guard.len() >= CACHE_CAPACITY {
            guard.clear();
        }
        guard.insert(expression.to_string(), variables.clone());
    }

    Ok(variables)
}
