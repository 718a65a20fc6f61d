/// Braille dot spinner frames shown while the curve is being revealed
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Get the current spinner frame character based on the frame count
pub fn spinner_frame(tick_count: u64) -> char {
    let idx = (tick_count / 3) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// Eighth-block glyphs for sub-cell progress
const PARTIAL_BLOCKS: &[char] = &[' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Render `progress` in [0, 1] as a bar exactly `width` cells wide
pub fn progress_bar(progress: f64, width: usize) -> String {
    let eighths = (progress.clamp(0.0, 1.0) * width as f64 * 8.0).round() as usize;
    let full = eighths / 8;
    let mut bar = "█".repeat(full);
    if full < width {
        bar.push(PARTIAL_BLOCKS[eighths % 8]);
        bar.extend(std::iter::repeat(' ').take(width - full - 1));
    }
    bar
}
