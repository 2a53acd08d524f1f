pub mod banner;
pub mod stat_card;

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::buffer::Buffer;

    /// Row `y` of `buf` as plain text.
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Every row of `buf`, newline separated.
    pub fn buffer_text(buf: &Buffer) -> String {
        (buf.area.y..buf.area.bottom())
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
