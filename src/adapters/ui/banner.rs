//! Neon ASCII banner with gradient (VIBE CHECK).
//! Uses figlet's bundled standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "VIBE CHECK";

/// Hot Pink (#ff2e97).
const HOT_PINK: (u8, u8, u8) = (0xff, 0x2e, 0x97);
/// Electric Cyan (#0ff0fc).
const ELECTRIC_CYAN: (u8, u8, u8) = (0x0f, 0xf0, 0xfc);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Figlet rendering of the title, or the plain title if the font cannot be loaded.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Prints the welcome banner: "VIBE CHECK" with a gradient from Hot Pink to Electric Cyan,
/// then version and a one-line hint.
pub fn print_welcome() {
    let mut out = stdout();
    let art = title_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(HOT_PINK, ELECTRIC_CYAN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: ELECTRIC_CYAN.0,
        g: ELECTRIC_CYAN.1,
        b: ELECTRIC_CYAN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Tell me how you feel, I'll find the soundtrack.\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(HOT_PINK, ELECTRIC_CYAN, 0.0), HOT_PINK);
        assert_eq!(lerp_rgb(HOT_PINK, ELECTRIC_CYAN, 1.0), ELECTRIC_CYAN);
    }

    #[test]
    fn test_title_art_not_empty() {
        assert!(title_art().lines().count() >= 1);
    }
}
