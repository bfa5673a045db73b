use crate::scanner::Scanner;

#[test]
fn test_lookahead() {
    let mut s = Scanner::new("2+3".chars());
    assert_eq!(s.peek(), Some(&'2'));
    assert_eq!(s.peek(), Some(&'2'));
    assert_eq!(s.next(), Some('2'));
    assert_eq!(s.peek(), Some(&'+'));
    assert_eq!(s.next(), Some('+'));
    assert_eq!(s.next(), Some('3'));
    assert_eq!(s.peek(), None);
    assert_eq!(s.next(), None);
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("x1".chars());
    assert_eq!(s.accept_if(|c| c.is_ascii_digit()), None);
    // a failed accept must not consume the item
    assert_eq!(s.peek(), Some(&'x'));
    assert_eq!(s.accept_if(|c| c.is_ascii_alphabetic()), Some('x'));
    assert_eq!(s.accept_if(|c| c.is_ascii_digit()), Some('1'));
    assert_eq!(s.accept_if(|c| c.is_ascii_digit()), None);
}

#[test]
fn test_skip_all() {
    let mut s = Scanner::new("1234+".chars());
    assert!(s.skip_all(|c| c.is_ascii_digit()));
    assert_eq!(s.extract_string(), "1234");
    assert!(!s.skip_all(|c| c.is_ascii_digit()));
    assert_eq!(s.next(), Some('+'));
}

#[test]
fn test_extract_resets_lexeme() {
    let mut s = Scanner::new("12.5×3".chars());
    s.skip_all(|c| c.is_ascii_digit() || *c == '.');
    assert_eq!(s.extract_string(), "12.5");
    assert_eq!(s.extract_string(), "");
    assert_eq!(s.next(), Some('×'));
    assert_eq!(s.extract_string(), "×");
    s.skip_all(|c| c.is_ascii_digit());
    assert_eq!(s.extract_string(), "3");
}

#[test]
fn test_ignore() {
    let mut s = Scanner::new("ab12".chars());
    s.skip_all(|c| c.is_ascii_alphabetic());
    s.ignore();
    s.skip_all(|c| c.is_ascii_digit());
    // ignored items never show up in a later lexeme
    assert_eq!(s.extract_string(), "12");
}

#[test]
fn test_skip_ws() {
    let mut s = Scanner::new(" \t π".chars());
    assert!(s.skip_ws());
    assert!(!s.skip_ws());
    assert_eq!(s.next(), Some('π'));
    assert_eq!(s.extract_string(), "π");
    assert!(!s.skip_ws());
    assert_eq!(s.next(), None);
}
