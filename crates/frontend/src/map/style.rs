//! Marker appearance per organization status.

/// Visual identity of one marker class. Blacklisted wins over verified so a
/// flagged organization is never shown with a trust mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

pub const BLACKLISTED: MarkerStyle = MarkerStyle {
    color: "#ef4444",
    glyph: "!",
    label: "Blacklisted NGO",
};

pub const VERIFIED: MarkerStyle = MarkerStyle {
    color: "#10b981",
    glyph: "\u{2713}",
    label: "Verified NGO",
};

pub const ACTIVE: MarkerStyle = MarkerStyle {
    color: "#f59e0b",
    glyph: "\u{2665}",
    label: "Active NGO",
};

/// Styles in legend order.
pub const LEGEND: [MarkerStyle; 3] = [VERIFIED, ACTIVE, BLACKLISTED];

pub fn marker_style(verified: bool, blacklisted: bool) -> MarkerStyle {
    if blacklisted {
        BLACKLISTED
    } else if verified {
        VERIFIED
    } else {
        ACTIVE
    }
}

/// Inner HTML for the divIcon. Only compile-time constants are
/// interpolated, so no escaping is needed.
pub fn div_icon_html(style: &MarkerStyle) -> String {
    format!(
        "<div class=\"ngo-marker\" style=\"background:{}\">{}</div>",
        style.color, style.glyph
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_takes_precedence_over_verified() {
        assert_eq!(marker_style(true, true), BLACKLISTED);
        assert_eq!(marker_style(false, true), BLACKLISTED);
    }

    #[test]
    fn verified_and_plain_styles() {
        assert_eq!(marker_style(true, false), VERIFIED);
        assert_eq!(marker_style(false, false), ACTIVE);
    }

    #[test]
    fn icon_html_carries_color_and_glyph() {
        let html = div_icon_html(&VERIFIED);
        assert!(html.contains("#10b981"));
        assert!(html.contains('\u{2713}'));
    }
}
