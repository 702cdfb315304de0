//! Design tokens. Each enum renders as a `data-*` attribute value the stylesheet keys on.

macro_rules! design_token {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $( $(#[$variant_meta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Attribute value for this token.
            pub fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }
    };
}

design_token! {
    /// Background treatment of cards and panels.
    pub enum SurfaceVariant (default Standard) {
        /// Paper surface.
        Standard => "standard",
        /// Dimmed surface for secondary blocks.
        Muted => "muted",
        /// Red accent surface.
        Accent => "accent",
    }
}

design_token! {
    /// Emphasis of a button or button-styled link.
    pub enum ButtonVariant (default Standard) {
        /// Outlined action.
        Standard => "standard",
        /// Filled call to action.
        Primary => "primary",
        /// Borderless action.
        Quiet => "quiet",
        /// Lock screen "Take Your Heart" treatment.
        Danger => "danger",
    }
}

design_token! {
    /// Button height and padding.
    pub enum ButtonSize (default Md) {
        /// Inline size.
        Md => "md",
        /// Hero and lock screen size.
        Lg => "lg",
    }
}

design_token! {
    /// Typographic role of a text run.
    pub enum TextRole (default Body) {
        /// Running text.
        Body => "body",
        /// Small print.
        Caption => "caption",
        /// Emphasized lead line.
        Title => "title",
    }
}

design_token! {
    /// Text color.
    pub enum TextTone (default Primary) {
        /// Ink.
        Primary => "primary",
        /// Muted ink.
        Secondary => "secondary",
        /// Brand red.
        Accent => "accent",
    }
}

design_token! {
    /// Space between children of a layout primitive.
    pub enum LayoutGap (default Md) {
        /// Flush.
        None => "none",
        /// Tight.
        Sm => "sm",
        /// Regular.
        Md => "md",
        /// Section spacing.
        Lg => "lg",
    }
}

design_token! {
    /// Cross-axis alignment.
    pub enum LayoutAlign (default Stretch) {
        /// Fill the cross axis.
        Stretch => "stretch",
        /// Pack to the start.
        Start => "start",
        /// Center.
        Center => "center",
        /// Pack to the end.
        End => "end",
    }
}

design_token! {
    /// Main-axis distribution.
    pub enum LayoutJustify (default Start) {
        /// Pack to the start.
        Start => "start",
        /// Center.
        Center => "center",
        /// Push the first and last child to the edges.
        Between => "between",
    }
}

design_token! {
    /// Input element a [`FormField`](crate::FormField) renders.
    pub enum FieldKind (default Text) {
        /// Single-line text input.
        Text => "text",
        /// Single-line email input.
        Email => "email",
        /// Multi-line text area.
        Multiline => "multiline",
    }
}

design_token! {
    /// Where a [`LinkButton`](crate::LinkButton) sends the visitor.
    pub enum LinkOpens (default SameTab) {
        /// Regular navigation.
        SameTab => "same-tab",
        /// New browsing context without an opener.
        NewTab => "new-tab",
        /// Save the target instead of navigating.
        Download => "download",
    }
}

impl LinkOpens {
    /// `target` attribute.
    pub fn target(self) -> Option<&'static str> {
        (self == Self::NewTab).then_some("_blank")
    }

    /// `rel` attribute.
    pub fn rel(self) -> Option<&'static str> {
        (self == Self::NewTab).then_some("noopener noreferrer")
    }

    /// Whether the anchor carries `download`.
    pub fn downloads(self) -> bool {
        self == Self::Download
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_render_the_resting_tokens() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutAlign::default().token(), "stretch");
        assert_eq!(TextTone::default().token(), "primary");
        assert_eq!(FieldKind::default(), FieldKind::Text);
    }

    #[test]
    fn only_new_tab_links_get_target_and_rel() {
        assert_eq!(LinkOpens::NewTab.target(), Some("_blank"));
        assert_eq!(LinkOpens::NewTab.rel(), Some("noopener noreferrer"));
        for opens in [LinkOpens::SameTab, LinkOpens::Download] {
            assert_eq!(opens.target(), None);
            assert_eq!(opens.rel(), None);
        }
        assert!(LinkOpens::Download.downloads());
        assert!(!LinkOpens::NewTab.downloads());
    }
}
