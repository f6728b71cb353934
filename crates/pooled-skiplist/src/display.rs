use std::io::{Result as IoResult, Write};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::list::SkipList;


/// Writes the values in sorted order, separated by single spaces.
impl<T: Display, Cmp, R, const MAX_LAYERS: usize> Display for SkipList<T, Cmp, R, MAX_LAYERS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut values = self.iter();

        if let Some(first) = values.next() {
            Display::fmt(first, f)?;
        }
        for value in values {
            f.write_str(" ")?;
            Display::fmt(value, f)?;
        }

        Ok(())
    }
}

impl<T: Debug, Cmp, R, const MAX_LAYERS: usize> Debug for SkipList<T, Cmp, R, MAX_LAYERS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Display, Cmp, R, const MAX_LAYERS: usize> SkipList<T, Cmp, R, MAX_LAYERS> {
    /// Write the values in sorted order to `sink`, separated by single spaces and followed by a
    /// newline.
    ///
    /// # Errors
    /// Returns any error from writing to `sink`.
    pub fn print<W: Write + ?Sized>(&self, sink: &mut W) -> IoResult<()> {
        writeln!(sink, "{self}")
    }
}


#[cfg(test)]
mod tests {
    use crate::{comparator::Descending, list::SkipList};


    #[test]
    fn print_values() {
        let list: SkipList<i32> = [42, -5, 7].into_iter().collect();

        let mut sink = Vec::new();
        list.print(&mut sink).unwrap();
        assert_eq!(sink, b"-5 7 42\n");

        assert_eq!(list.to_string(), "-5 7 42");
        assert_eq!(format!("{list:?}"), "{-5, 7, 42}");
    }

    #[test]
    fn print_empty() {
        let list: SkipList<&str, Descending> = SkipList::new();

        let mut sink = Vec::new();
        list.print(&mut sink).unwrap();
        assert_eq!(sink, b"\n");
        assert_eq!(format!("{list:?}"), "{}");
    }
}
