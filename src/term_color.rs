use ratatui::style::Color;

/// Map an RGB triple to the best color the terminal can show.
///
/// With truecolor (`COLORTERM` of `truecolor` or `24bit`) the triple is used
/// as is; otherwise it falls back to the nearest xterm-256 index.
pub fn map_rgb_to_color(r: u8, g: u8, b: u8) -> Color {
    let truecolor = std::env::var("COLORTERM")
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.contains("truecolor") || value.contains("24bit")
        })
        .unwrap_or(false);
    if truecolor {
        Color::Rgb(r, g, b)
    } else {
        Color::Indexed(nearest_xterm_index(r, g, b))
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn nearest_xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (cube_step(r), cube_step(g), cube_step(b));
    let cube = (
        CUBE_LEVELS[ri as usize],
        CUBE_LEVELS[gi as usize],
        CUBE_LEVELS[bi as usize],
    );
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    // 24-step gray ramp at 232..=255, values 8, 18, .., 238
    let avg = (r as u16 + g as u16 + b as u16) / 3;
    let gray_step = (avg.saturating_sub(3) / 10).min(23) as u8;
    let gray_value = 8 + gray_step * 10;

    if distance((r, g, b), (gray_value, gray_value, gray_value)) < distance((r, g, b), cube) {
        232 + gray_step
    } else {
        cube_index
    }
}

fn cube_step(value: u8) -> u8 {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (**level as i16 - value as i16).unsigned_abs())
        .map(|(index, _)| index as u8)
        .unwrap_or(0)
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}
