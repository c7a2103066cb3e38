//! Theme configuration for `Foliobar`.
//!
//! Light glassmorphic bar over the page, with a blue-indigo-purple brand
//! gradient. Values are emitted as CSS custom properties consumed by
//! `styles/navbar.css`.

/// Color palette for the navigation bar.
pub mod colors {
    /// Glass surfaces.
    pub mod glass {
        /// Translucent bar background.
        pub const SURFACE: &str = "rgba(255, 255, 255, 0.1)";
        /// Border around the bar.
        pub const BORDER: &str = "rgba(255, 255, 255, 0.2)";
        /// One-pixel highlight along the top edge.
        pub const REFLECTION: &str = "rgba(255, 255, 255, 0.5)";
        /// Backdrop blur for the bar.
        pub const BLUR: &str = "12px";
        /// Stronger blur for the mobile panel.
        pub const BLUR_STRONG: &str = "16px";
    }

    /// Text colors.
    pub mod text {
        /// Default link text.
        pub const PRIMARY: &str = "#000000";
        /// Active desktop link.
        pub const ACTIVE: &str = "#4b5563";
        /// Text on filled surfaces.
        pub const INVERSE: &str = "#ffffff";
    }

    /// Accent colors.
    pub mod accent {
        /// Brand blue.
        pub const BLUE: &str = "#60a5fa";
        /// Brand indigo.
        pub const INDIGO: &str = "#6366f1";
        /// Brand purple.
        pub const PURPLE: &str = "#9333ea";
        /// Hover background for desktop links.
        pub const HOVER: &str = "rgba(67, 56, 202, 0.6)";
        /// Active background for mobile links.
        pub const ACTIVE_FILL: &str = "rgba(79, 70, 229, 0.4)";
    }

    /// Gradient definitions.
    pub mod gradient {
        /// Brand text and underline gradient.
        pub const BRAND: &str = "linear-gradient(to right, #60a5fa, #6366f1, #9333ea)";
        /// Tint laid over the glass bar.
        pub const OVERLAY: &str = "linear-gradient(to right, rgba(59, 130, 246, 0.1), rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1))";
        /// Tint laid over the mobile panel.
        pub const PANEL: &str =
            "linear-gradient(to bottom, rgba(59, 130, 246, 0.05), rgba(168, 85, 247, 0.05))";
        /// Resume button fill.
        pub const BUTTON: &str = "linear-gradient(to right, rgba(59, 130, 246, 0.9), rgba(79, 70, 229, 0.9), rgba(147, 51, 234, 0.9))";
    }

    /// Shadows.
    pub mod shadow {
        /// Shadow applied once the page is scrolled.
        pub const SCROLLED: &str =
            "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)";
        /// Glow under the resume button on hover.
        pub const BUTTON_GLOW: &str = "0 10px 25px -5px rgba(99, 102, 241, 0.4)";
    }
}

/// Layout dimensions.
pub mod layout {
    /// Share of the viewport width taken by the bar.
    pub const BAR_WIDTH: &str = "80%";
    /// Maximum bar width.
    pub const BAR_MAX_WIDTH: &str = "80rem";
    /// Gap between the viewport top and the bar.
    pub const BAR_TOP: &str = "1rem";
    /// Corner radius of the bar and links.
    pub const RADIUS: &str = "0.75rem";
}

/// Animation timings.
pub mod animation {
    /// Slide-in of the bar on mount.
    pub const ENTER: &str = "0.6s cubic-bezier(0.34, 1.4, 0.64, 1)";
    /// Link hover and active transitions.
    pub const LINK: &str = "0.2s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Shadow change when scrolling past the threshold.
    pub const SHADOW: &str = "0.3s ease";
    /// Mobile panel open and close.
    pub const PANEL: &str = "0.3s ease";
    /// Delay between consecutive mobile items.
    pub const STAGGER_MS: u32 = 50;
    /// Time the mobile panel's exit animation needs before removal.
    pub const PANEL_EXIT_MS: u64 = 300;
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Glass */
  --glass-surface: {glass_surface};
  --glass-border: {glass_border};
  --glass-reflection: {glass_reflection};
  --glass-blur: {glass_blur};
  --glass-blur-strong: {glass_blur_strong};

  /* Text */
  --text-primary: {text_primary};
  --text-active: {text_active};
  --text-inverse: {text_inverse};

  /* Accents */
  --accent-blue: {accent_blue};
  --accent-indigo: {accent_indigo};
  --accent-purple: {accent_purple};
  --accent-hover: {accent_hover};
  --accent-active-fill: {accent_active_fill};

  /* Gradients */
  --gradient-brand: {gradient_brand};
  --gradient-overlay: {gradient_overlay};
  --gradient-panel: {gradient_panel};
  --gradient-button: {gradient_button};

  /* Shadows */
  --shadow-scrolled: {shadow_scrolled};
  --shadow-button-glow: {shadow_button_glow};

  /* Layout */
  --bar-width: {bar_width};
  --bar-max-width: {bar_max_width};
  --bar-top: {bar_top};
  --bar-radius: {bar_radius};

  /* Animation */
  --transition-enter: {transition_enter};
  --transition-link: {transition_link};
  --transition-shadow: {transition_shadow};
  --transition-panel: {transition_panel};
}}",
        glass_surface = colors::glass::SURFACE,
        glass_border = colors::glass::BORDER,
        glass_reflection = colors::glass::REFLECTION,
        glass_blur = colors::glass::BLUR,
        glass_blur_strong = colors::glass::BLUR_STRONG,
        text_primary = colors::text::PRIMARY,
        text_active = colors::text::ACTIVE,
        text_inverse = colors::text::INVERSE,
        accent_blue = colors::accent::BLUE,
        accent_indigo = colors::accent::INDIGO,
        accent_purple = colors::accent::PURPLE,
        accent_hover = colors::accent::HOVER,
        accent_active_fill = colors::accent::ACTIVE_FILL,
        gradient_brand = colors::gradient::BRAND,
        gradient_overlay = colors::gradient::OVERLAY,
        gradient_panel = colors::gradient::PANEL,
        gradient_button = colors::gradient::BUTTON,
        shadow_scrolled = colors::shadow::SCROLLED,
        shadow_button_glow = colors::shadow::BUTTON_GLOW,
        bar_width = layout::BAR_WIDTH,
        bar_max_width = layout::BAR_MAX_WIDTH,
        bar_top = layout::BAR_TOP,
        bar_radius = layout::RADIUS,
        transition_enter = animation::ENTER,
        transition_link = animation::LINK,
        transition_shadow = animation::SHADOW,
        transition_panel = animation::PANEL,
    )
}
