#![deny(warnings)]

// Buffers an underlying iterator with single-item lookahead and keeps the
// items consumed since the last extract/ignore as the current lexeme.
pub struct Scanner<I: Iterator>
where
    I::Item: Clone,
{
    src: I,
    lookahead: Option<I::Item>,
    lexeme: Vec<I::Item>,
}

impl<I: Iterator> Iterator for Scanner<I>
where
    I::Item: Clone,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.lookahead.take().or_else(|| self.src.next())?;
        self.lexeme.push(item.clone());
        Some(item)
    }
}

impl<I: Iterator> Scanner<I>
where
    I::Item: Clone,
{
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source,
            lookahead: None,
            lexeme: Vec::new(),
        }
    }

    // look at the upcoming item without consuming it
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.lookahead.is_none() {
            self.lookahead = self.src.next();
        }
        self.lookahead.as_ref()
    }

    // consume the upcoming item only if it satisfies a predicate
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        if pred(self.peek()?) {
            self.next()
        } else {
            None
        }
    }

    // consume items while they satisfy a predicate, result is if we advanced.
    // named clear of Iterator::skip_while, which would win method resolution
    // on an owned scanner and swallow it into an adapter
    pub fn skip_all(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() {
            advanced = true;
        }
        advanced
    }

    // take everything consumed since the last extract/ignore, reset lexeme
    pub fn extract(&mut self) -> Vec<I::Item> {
        std::mem::take(&mut self.lexeme)
    }

    // drop everything consumed since the last extract/ignore
    pub fn ignore(&mut self) {
        self.lexeme.clear();
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // discard whitespace, result is if any was skipped
    pub fn skip_ws(&mut self) -> bool {
        if self.skip_all(|c| c.is_whitespace()) {
            self.ignore();
            return true;
        }
        false
    }
}
