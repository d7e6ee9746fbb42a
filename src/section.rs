/// Section properties: page size, margins, header/footer distances.
#[derive(Debug, Clone)]
pub struct SectionProperties {
    /// Page width in twips (twentieth of a point, 1440 = 1 inch)
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Top margin in twips
    pub margin_top: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Header distance from the top edge in twips
    pub header_distance: u32,
    /// Footer distance from the bottom edge in twips
    pub footer_distance: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // A4: 210mm x 297mm, 1 inch margins all around.
        Self {
            page_width: 11906,
            page_height: 16838,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            header_distance: 720,
            footer_distance: 720,
        }
    }
}

impl SectionProperties {
    /// A4 page size (210mm x 297mm).
    pub fn a4() -> Self {
        Self::default()
    }

    /// US Letter page size (8.5" x 11").
    pub fn letter() -> Self {
        Self {
            page_width: 12240,
            page_height: 15840,
            ..Default::default()
        }
    }

    /// Set all four margins in twips.
    pub fn margins(mut self, top: u32, bottom: u32, left: u32, right: u32) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self.margin_right = right;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_default() {
        let section = SectionProperties::a4();
        assert_eq!(section.page_width, 11906);
        assert_eq!(section.page_height, 16838);
        assert_eq!(section.margin_top, 1440);
    }

    #[test]
    fn test_margins() {
        let section = SectionProperties::a4().margins(1080, 1080, 1080, 1080);
        assert_eq!(section.margin_left, 1080);
        assert_eq!(section.margin_right, 1080);
    }
}
