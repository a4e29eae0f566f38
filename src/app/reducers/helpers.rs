//! Character-indexed string editing shared by the form sub-reducers.

pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

pub fn insert_char_at_cursor(s: &mut String, char_pos: usize, c: char) {
    let byte_idx = char_to_byte_index(s, char_pos);
    s.insert(byte_idx, c);
}

/// Removes the char before `char_pos`. Returns false at the start of the string.
pub fn remove_char_before_cursor(s: &mut String, char_pos: usize) -> bool {
    if char_pos == 0 {
        return false;
    }
    match s.char_indices().nth(char_pos - 1) {
        Some((byte_idx, _)) => {
            s.remove(byte_idx);
            true
        }
        None => false,
    }
}
