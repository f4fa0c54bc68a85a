use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone, Debug)]
pub struct Palette {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    accent: Color32,
    warning: Color32,
    danger: Color32,
}

impl Palette {
    //Loosely based on the dracula palette
    fn kennel_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            panel: Color32::from_rgb(33, 35, 53),
            raised: Color32::from_rgb(52, 54, 66),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            muted: Color32::from_rgb(0x62, 0x72, 0xa4),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            accent: Color32::from_rgb(189, 147, 249),
            warning: Color32::from_rgb(0xff, 0xb8, 0x6c),
            danger: Color32::from_rgb(0xff, 0x55, 0x55),
        }
    }

    fn kennel_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            panel: Color32::from_rgb(245, 245, 240),
            raised: Color32::from_rgb(255, 255, 250),
            foreground: Color32::from_rgb(40, 42, 54),
            muted: Color32::from_rgb(120, 130, 160),
            selection: Color32::from_rgb(200, 200, 220),
            accent: Color32::from_rgb(150, 120, 220),
            warning: Color32::from_rgb(220, 150, 90),
            danger: Color32::from_rgb(200, 80, 80),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::kennel()
    }
}

impl Theme {
    pub fn kennel() -> Self {
        Theme { dark: Palette::kennel_dark(), light: Palette::kennel_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn label(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted)
    }

    /// Fill for buttons that lead somewhere (edit).
    pub fn warning(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).warning
    }

    /// Fill for destructive buttons (delete).
    pub fn danger(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).danger
    }

    pub fn on_fill(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).background
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).raised
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    palette.background,
                    palette.panel,
                ),
                inactive: widget(default.widgets.inactive, palette.raised, palette.panel),
                hovered: widget(default.widgets.hovered, palette.selection, palette.accent),
                active: widget(default.widgets.active, palette.selection, palette.accent),
                open: widget(default.widgets.open, palette.panel, palette.accent),
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.accent,
            error_fg_color: palette.danger,
            warn_fg_color: palette.warning,
            window_fill: palette.background,
            panel_fill: palette.panel,
            ..default
        },
    );
}
