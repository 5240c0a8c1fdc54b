use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! browser_properties {
    ($($variant:ident => $key:literal, $title:literal, $description:literal;)+) => {
        /// Color properties understood by the native browser theming API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum BrowserProperty {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl BrowserProperty {
            pub const ALL: &'static [BrowserProperty] = &[$(BrowserProperty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(BrowserProperty::$variant => $key,)+
                }
            }

            pub fn title(&self) -> &'static str {
                match self {
                    $(BrowserProperty::$variant => $title,)+
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $(BrowserProperty::$variant => $description,)+
                }
            }
        }
    };
}

browser_properties! {
    Icons => "icons", "Icons",
        "The color of toolbar icons, excluding those in the find toolbar.";
    IconsAttention => "icons_attention", "Icons attention",
        "The color of toolbar icons in attention state, e.g. the starred bookmark icon.";
    Frame => "frame", "Frame",
        "The color of the header area background.";
    FrameInactive => "frame_inactive", "Frame inactive",
        "The color of the header area background when the window is inactive.";
    TabText => "tab_text", "Tab text",
        "The text color for the selected tab.";
    TabLoading => "tab_loading", "Tab loading",
        "The color of the tab loading indicator and the tab loading burst.";
    TabBackgroundText => "tab_background_text", "Tab background text",
        "The color of the text displayed in the inactive page tabs.";
    TabSelected => "tab_selected", "Tab selected",
        "The background color of the selected tab.";
    TabLine => "tab_line", "Tab line",
        "The color of the selected tab line.";
    TabBackgroundSeparator => "tab_background_separator", "Tab background separator",
        "The color of the vertical separator of the background tabs.";
    Toolbar => "toolbar", "Toolbar",
        "The background color for the navigation bar, the bookmarks bar, and the selected tab.";
    ToolbarText => "toolbar_text", "Toolbar text",
        "The text color in the main toolbar.";
    ToolbarField => "toolbar_field", "Toolbar field",
        "The background color for fields in the toolbar, such as the URL bar.";
    ToolbarFieldFocus => "toolbar_field_focus", "Toolbar field focus",
        "The focused background color for fields in the toolbar, such as the URL bar.";
    ToolbarFieldText => "toolbar_field_text", "Toolbar field text",
        "The color of text in fields in the toolbar, such as the URL bar.";
    ToolbarFieldTextFocus => "toolbar_field_text_focus", "Toolbar field text focus",
        "The color of text in focused fields in the toolbar, such as the URL bar.";
    ToolbarFieldBorder => "toolbar_field_border", "Toolbar field border",
        "The border color for fields in the toolbar.";
    ToolbarFieldBorderFocus => "toolbar_field_border_focus", "Toolbar field border focus",
        "The focused border color for fields in the toolbar.";
    ToolbarFieldSeparator => "toolbar_field_separator", "Toolbar field separator",
        "The color of separators inside the URL bar.";
    ToolbarFieldHighlight => "toolbar_field_highlight", "Toolbar field highlight",
        "The background color used to indicate the current selection of text in the URL bar.";
    ToolbarFieldHighlightText => "toolbar_field_highlight_text", "Toolbar field highlight text",
        "The color used to draw text that's currently selected in the URL bar.";
    ToolbarBottomSeparator => "toolbar_bottom_separator", "Toolbar bottom separator",
        "The color of the line separating the bottom of the toolbar from the region below.";
    ToolbarTopSeparator => "toolbar_top_separator", "Toolbar top separator",
        "The color of the line separating the top of the toolbar from the region above.";
    ToolbarVerticalSeparator => "toolbar_vertical_separator", "Toolbar vertical separator",
        "The color of the separator next to the application menu icon.";
    NtpBackground => "ntp_background", "New tab page background",
        "The new tab page background color.";
    NtpText => "ntp_text", "New tab page text",
        "The new tab page text color.";
    NtpCardBackground => "ntp_card_background", "New tab page card background",
        "The background color of cards on the new tab page.";
    Popup => "popup", "Popup",
        "The background color of popups (eg. url bar dropdown and arrow panels).";
    PopupBorder => "popup_border", "Popup border",
        "The border color of popups.";
    PopupText => "popup_text", "Popup text",
        "The text color of popups.";
    PopupHighlight => "popup_highlight", "Popup highlight",
        "The background color of items highlighted using the keyboard inside popups.";
    PopupHighlightText => "popup_highlight_text", "Popup highlight text",
        "The text color of items highlighted inside popups.";
    Sidebar => "sidebar", "Sidebar",
        "The background color of the sidebar.";
    SidebarBorder => "sidebar_border", "Sidebar border",
        "The border and splitter color of the browser sidebar.";
    SidebarText => "sidebar_text", "Sidebar text",
        "The text color of sidebars.";
    SidebarHighlight => "sidebar_highlight", "Sidebar highlight",
        "The background color of highlighted rows in built-in sidebars.";
    SidebarHighlightText => "sidebar_highlight_text", "Sidebar highlight text",
        "The text color of highlighted rows in sidebars.";
    BookmarkText => "bookmark_text", "Bookmark text",
        "The color of text and icons in the bookmark and find bars.";
    ButtonBackgroundHover => "button_background_hover", "Button background hover",
        "The color of the background of the toolbar buttons on hover.";
    ButtonBackgroundActive => "button_background_active", "Button background active",
        "The color of the background of the pressed toolbar buttons.";
}

impl fmt::Display for BrowserProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cookie setting identifiers used by DuckDuckGo for its theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThirdPartyKey {
    #[serde(rename = "k7")]
    Background,
    #[serde(rename = "kj")]
    HeaderBackground,
    #[serde(rename = "k9")]
    ResultTitle,
    #[serde(rename = "k8")]
    ResultDescription,
    #[serde(rename = "kx")]
    ResultLink,
    #[serde(rename = "kaa")]
    ResultLinkVisited,
    #[serde(rename = "k21")]
    Hover,
}

impl ThirdPartyKey {
    pub const ALL: [ThirdPartyKey; 7] = [
        ThirdPartyKey::Background,
        ThirdPartyKey::HeaderBackground,
        ThirdPartyKey::ResultTitle,
        ThirdPartyKey::ResultDescription,
        ThirdPartyKey::ResultLink,
        ThirdPartyKey::ResultLinkVisited,
        ThirdPartyKey::Hover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThirdPartyKey::Background => "k7",
            ThirdPartyKey::HeaderBackground => "kj",
            ThirdPartyKey::ResultTitle => "k9",
            ThirdPartyKey::ResultDescription => "k8",
            ThirdPartyKey::ResultLink => "kx",
            ThirdPartyKey::ResultLinkVisited => "kaa",
            ThirdPartyKey::Hover => "k21",
        }
    }
}

impl fmt::Display for ThirdPartyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
