//! Address identicon avatar.
//!
//! Deterministic color chip derived from the address bytes, with the
//! first hex digits as initials. Lightweight stand-in for a blockies
//! style avatar.

use leptos::*;

/// Derive the avatar background color from the leading address bytes.
///
/// Falls back to a neutral grey when the address is not parseable hex.
pub fn identicon_color(address: &str) -> String {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    match hex::decode(digits.get(..6).unwrap_or_default()) {
        Ok(bytes) if bytes.len() == 3 => {
            format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
        }
        _ => "#888888".to_string(),
    }
}

#[component]
pub fn Identicon(
    /// Address to fingerprint
    address: String,
    /// Chip size in pixels
    #[prop(default = 28)]
    size: u32,
) -> impl IntoView {
    let color = identicon_color(&address);
    let initials = address
        .strip_prefix("0x")
        .unwrap_or(&address)
        .chars()
        .take(2)
        .collect::<String>();

    view! {
        <span
            class="identicon"
            style=format!(
                "background:{}; width:{}px; height:{}px; line-height:{}px;",
                color, size, size, size
            )
            title=address
        >
            {initials}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_is_deterministic() {
        let addr = "0xA1b2C3d4E5f60718293a4B5c6D7e8F9012345678";
        assert_eq!(identicon_color(addr), identicon_color(addr));
        assert_eq!(identicon_color(addr), "#a1b2c3");
    }

    #[test]
    fn test_color_falls_back_on_garbage() {
        assert_eq!(identicon_color("not-an-address"), "#888888");
        assert_eq!(identicon_color("0x12"), "#888888");
    }
}
