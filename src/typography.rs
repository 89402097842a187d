//! Heading typography scale.
//!
//! Six heading sizes, each with a font size per breakpoint and a bottom margin
//! used when a heading is rendered with the tight-margin flag.

use crate::breakpoint::Breakpoint;

/// Font sizes and tight margins for one heading size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleEntry {
    pub mobile: &'static str,
    pub tablet: &'static str,
    pub desktop: &'static str,
    pub margin_mobile: &'static str,
    pub margin_desktop: &'static str,
}

const SCALE: [ScaleEntry; 6] = [
    ScaleEntry { mobile: "38px", tablet: "48px", desktop: "67px", margin_mobile: "16px", margin_desktop: "20px" },
    ScaleEntry { mobile: "36px", tablet: "40px", desktop: "56px", margin_mobile: "12px", margin_desktop: "16px" },
    ScaleEntry { mobile: "28px", tablet: "32px", desktop: "40px", margin_mobile: "8px", margin_desktop: "12px" },
    ScaleEntry { mobile: "25px", tablet: "28px", desktop: "34px", margin_mobile: "6px", margin_desktop: "10px" },
    ScaleEntry { mobile: "23px", tablet: "23px", desktop: "23px", margin_mobile: "8px", margin_desktop: "8px" },
    ScaleEntry { mobile: "18px", tablet: "18px", desktop: "18px", margin_mobile: "8px", margin_desktop: "8px" },
];

/// Scale entry for `size` (1-6). Anything else falls back to size 1.
pub fn scale_entry(size: u8) -> &'static ScaleEntry {
    match size {
        1..=6 => &SCALE[usize::from(size) - 1],
        _ => &SCALE[0],
    }
}

impl ScaleEntry {
    pub fn font_size(&self, breakpoint: Breakpoint) -> &'static str {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
        }
    }

    /// Bottom margin for tight-margin headings. Tablet shares the desktop value.
    pub fn tight_margin(&self, breakpoint: Breakpoint) -> &'static str {
        match breakpoint {
            Breakpoint::Mobile => self.margin_mobile,
            Breakpoint::Tablet | Breakpoint::Desktop => self.margin_desktop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_one_values() {
        let entry = scale_entry(1);
        assert_eq!(entry.font_size(Breakpoint::Mobile), "38px");
        assert_eq!(entry.font_size(Breakpoint::Tablet), "48px");
        assert_eq!(entry.font_size(Breakpoint::Desktop), "67px");
        assert_eq!(entry.tight_margin(Breakpoint::Mobile), "16px");
        assert_eq!(entry.tight_margin(Breakpoint::Desktop), "20px");
    }

    #[test]
    fn small_sizes_are_flat() {
        for size in [5, 6] {
            let entry = scale_entry(size);
            assert_eq!(entry.font_size(Breakpoint::Mobile), entry.font_size(Breakpoint::Desktop));
        }
    }

    #[test]
    fn out_of_range_falls_back_to_size_one() {
        assert_eq!(scale_entry(0), scale_entry(1));
        assert_eq!(scale_entry(7), scale_entry(1));
        assert_eq!(scale_entry(255), scale_entry(1));
    }

    #[test]
    fn size_four_margins() {
        let entry = scale_entry(4);
        assert_eq!(entry.tight_margin(Breakpoint::Mobile), "6px");
        assert_eq!(entry.tight_margin(Breakpoint::Tablet), "10px");
    }
}
