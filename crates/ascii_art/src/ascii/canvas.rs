use std::fmt;

/// Rectangular block of ASCII art; every row is exactly `width` characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiCanvas {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(width: u32, height: u32, cells: Vec<char>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width as usize).map(|row| row.iter().collect::<String>())
    }

    /// The whole canvas as newline-separated rows, without a trailing
    /// newline.
    pub fn to_text(&self) -> String {
        self.rows().collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_chunked_by_width() {
        let canvas = AsciiCanvas::new(3, 2, vec!['a', 'b', 'c', 'd', 'e', 'f']);
        let rows: Vec<String> = canvas.rows().collect();
        assert_eq!(rows, vec!["abc".to_string(), "def".to_string()]);
    }

    #[test]
    fn text_has_no_trailing_newline() {
        let canvas = AsciiCanvas::new(2, 2, vec!['+', '+', '+', '+']);
        assert_eq!(canvas.to_text(), "++\n++");
        assert_eq!(format!("{canvas}"), "++\n++");
    }

    #[test]
    #[should_panic]
    fn cell_count_must_match_dimensions() {
        AsciiCanvas::new(2, 2, vec!['x']);
    }
}
