use ropey::LineType;
use ropey::Rope;

/// Rope-backed view over one version of the text. Lines keep their
/// terminators; a single trailing terminator does not produce a phantom
/// empty final line.
#[derive(Clone, Debug)]
pub struct Document {
    rope: Rope,
}

impl Document {
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut count = self.rope.len_lines(LineType::LF);
        if count == 0 {
            return 0;
        }

        if self.rope.byte(self.rope.len() - 1) == b'\n' {
            count = count.saturating_sub(1);
        }

        count
    }

    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.line_count() {
            return None;
        }
        let slice = self.rope.line(index, LineType::LF);
        Some(
            slice
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| slice.chunks().collect()),
        )
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|index| self.line(index))
            .collect()
    }

    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }
}
