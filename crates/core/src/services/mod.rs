mod themes;

pub use themes::ThemeService;
