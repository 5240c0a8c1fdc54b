use once_cell::sync::Lazy;

use super::{
    BrowserProperty, BrowserTemplate, ColorschemeTemplate, PaletteTemplate, ThirdPartyItem,
    ThirdPartyKey, ThirdPartyTemplate,
};
use crate::model::{PaletteColor, TemplateMode};

use super::BrowserProperty as B;
use crate::model::PaletteColor as P;

pub static DEFAULT_THEME_DARK: Lazy<ColorschemeTemplate> = Lazy::new(|| ColorschemeTemplate {
    palette: PaletteTemplate::from([
        (P::Background, 0),
        (P::BackgroundLight, 16),
        (P::BackgroundExtra, 18),
        (P::AccentPrimary, 10),
        (P::AccentSecondary, 13),
        (P::Text, 15),
        (P::TextFocus, 17),
    ]),
    browser: browser_template([
        (B::TabBackgroundSeparator, P::BackgroundLight),
        (B::ToolbarField, P::BackgroundExtra),
        (B::ToolbarFieldFocus, P::BackgroundExtra),
        (B::ToolbarFieldBorder, P::BackgroundLight),
        (B::ToolbarFieldSeparator, P::BackgroundLight),
        (B::ToolbarFieldHighlightText, P::Background),
        (B::ToolbarBottomSeparator, P::BackgroundLight),
        (B::SidebarBorder, P::BackgroundLight),
    ]),
    third_party: third_party_template(P::Background, 0.2),
});

pub static DEFAULT_THEME_LIGHT: Lazy<ColorschemeTemplate> = Lazy::new(|| ColorschemeTemplate {
    palette: PaletteTemplate::from([
        (P::Background, 19),
        (P::BackgroundLight, 17),
        (P::BackgroundExtra, 7),
        (P::AccentPrimary, 3),
        (P::AccentSecondary, 5),
        (P::Text, 16),
        (P::TextFocus, 0),
    ]),
    browser: browser_template([
        (B::TabBackgroundSeparator, P::Background),
        (B::ToolbarField, P::BackgroundLight),
        (B::ToolbarFieldFocus, P::BackgroundLight),
        (B::ToolbarFieldBorder, P::Background),
        (B::ToolbarFieldSeparator, P::Background),
        (B::ToolbarFieldHighlightText, P::BackgroundLight),
        (B::ToolbarBottomSeparator, P::Background),
        (B::SidebarBorder, P::Background),
    ]),
    third_party: third_party_template(P::BackgroundLight, -0.3),
});

/// The packaged template for `mode`.
pub fn default_template(mode: TemplateMode) -> &'static ColorschemeTemplate {
    match mode {
        TemplateMode::Dark => &DEFAULT_THEME_DARK,
        TemplateMode::Light => &DEFAULT_THEME_LIGHT,
    }
}

/// Shared browser mappings plus the handful that differ between modes.
fn browser_template(mode_specific: [(BrowserProperty, PaletteColor); 8]) -> BrowserTemplate {
    let mut template = BrowserTemplate::from([
        (B::Icons, P::AccentPrimary),
        (B::IconsAttention, P::AccentSecondary),
        (B::Frame, P::Background),
        (B::FrameInactive, P::Background),
        (B::TabText, P::TextFocus),
        (B::TabLoading, P::AccentPrimary),
        (B::TabBackgroundText, P::Text),
        (B::TabSelected, P::BackgroundLight),
        (B::TabLine, P::BackgroundLight),
        (B::Toolbar, P::BackgroundLight),
        (B::ToolbarText, P::TextFocus),
        (B::ToolbarFieldText, P::Text),
        (B::ToolbarFieldTextFocus, P::TextFocus),
        (B::ToolbarFieldBorderFocus, P::BackgroundLight),
        (B::ToolbarFieldHighlight, P::AccentPrimary),
        (B::ToolbarTopSeparator, P::Background),
        (B::ToolbarVerticalSeparator, P::BackgroundLight),
        (B::NtpBackground, P::Background),
        (B::NtpText, P::Text),
        (B::NtpCardBackground, P::BackgroundLight),
        (B::Popup, P::BackgroundLight),
        (B::PopupBorder, P::BackgroundLight),
        (B::PopupText, P::Text),
        (B::PopupHighlight, P::AccentPrimary),
        (B::PopupHighlightText, P::Background),
        (B::Sidebar, P::BackgroundLight),
        (B::SidebarText, P::Text),
        (B::SidebarHighlight, P::AccentPrimary),
        (B::SidebarHighlightText, P::TextFocus),
        (B::BookmarkText, P::TextFocus),
        (B::ButtonBackgroundHover, P::BackgroundExtra),
        (B::ButtonBackgroundActive, P::BackgroundExtra),
    ]);
    template.extend(mode_specific);
    template
}

fn third_party_template(main_background: PaletteColor, link_modifier: f64) -> ThirdPartyTemplate {
    ThirdPartyTemplate::from([
        (ThirdPartyKey::Background, ThirdPartyItem::plain(main_background)),
        (ThirdPartyKey::HeaderBackground, ThirdPartyItem::plain(main_background)),
        (ThirdPartyKey::ResultTitle, ThirdPartyItem::plain(P::TextFocus)),
        (ThirdPartyKey::ResultDescription, ThirdPartyItem::plain(P::Text)),
        (ThirdPartyKey::Hover, ThirdPartyItem::plain(P::BackgroundLight)),
        (
            ThirdPartyKey::ResultLink,
            ThirdPartyItem::shifted(P::AccentSecondary, link_modifier),
        ),
        (
            ThirdPartyKey::ResultLinkVisited,
            ThirdPartyItem::shifted(P::AccentPrimary, link_modifier),
        ),
    ])
}
