use std::fmt;

use crate::DHeap;

/// Iterator over the levels of a heap, root first. Each item is the slice of
/// keys stored on that level; only the last one may be partially filled.
#[derive(Debug, Clone)]
pub struct Levels<'a, T> {
    keys: &'a [T],
    d: usize,
    first: usize,
    width: usize,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.first >= self.keys.len() {
            return None;
        }
        let end = self.first.saturating_add(self.width).min(self.keys.len());
        let level = &self.keys[self.first..end];
        // first index of the next level is the leftmost child of this one
        self.first = self.d.saturating_mul(self.first).saturating_add(1);
        self.width = self.width.saturating_mul(self.d);
        Some(level)
    }
}

impl<T: Ord + Copy + Default> DHeap<T> {
    pub fn levels(&self) -> Levels<'_, T> {
        Levels {
            keys: self.as_slice(),
            d: self.branching_factor(),
            first: 0,
            width: 1,
        }
    }
}

/// Renders an indented tree sketch followed by a `Level N: ...` listing.
/// An empty heap renders as nothing.
impl<T: Ord + Copy + Default + fmt::Display> fmt::Display for DHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = match self.height() {
            Some(h) => h + 1,
            None => return Ok(()),
        };
        let d = self.branching_factor();
        let run = |exp: usize| d.saturating_pow(exp as u32) - 1;

        for (depth, level) in self.levels().enumerate() {
            let indent = run(levels - depth - 1);
            let spacing = run(levels - depth);
            write!(f, "{:indent$}", "")?;
            for key in level {
                write!(f, "{key}{:spacing$}", "")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        for (depth, level) in self.levels().enumerate() {
            write!(f, "Level {}: ", depth + 1)?;
            for (n, key) in level.iter().enumerate() {
                if n > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
