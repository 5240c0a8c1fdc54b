use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{BrowserProperty, ColorschemeTemplate, ThirdPartyItem, ThirdPartyKey};
use crate::model::PaletteColor;

/// One field of a user edit.
///
/// In JSON an absent key is [`Override::Unset`], an explicit `null` is
/// [`Override::Reset`] and any other value is [`Override::Set`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Override<T> {
    #[default]
    Unset,
    Reset,
    Set(T),
}

impl<T> Override<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Override::Unset)
    }

    /// The value after applying this edit on top of `current`.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Override::Set(value) => Some(value),
            Override::Unset | Override::Reset => current,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Override<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Override::Set(value),
            None => Override::Reset,
        })
    }
}

impl<T: Serialize> Serialize for Override<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Override::Set(value) => value.serialize(serializer),
            Override::Unset | Override::Reset => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedThirdPartyItem {
    #[serde(default, skip_serializing_if = "Override::is_unset")]
    pub color_key: Override<PaletteColor>,
    #[serde(default, skip_serializing_if = "Override::is_unset")]
    pub modifier: Override<f64>,
}

/// A partial template saved by the user on top of the global one.
///
/// A top-level section that is missing or `null` takes no part in the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<BTreeMap<PaletteColor, Override<usize>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<BTreeMap<BrowserProperty, Override<PaletteColor>>>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "duckduckgo")]
    pub third_party: Option<BTreeMap<ThirdPartyKey, Override<SavedThirdPartyItem>>>,
}

impl SavedTemplate {
    pub fn is_empty(&self) -> bool {
        self.palette.as_ref().map_or(true, BTreeMap::is_empty)
            && self.browser.as_ref().map_or(true, BTreeMap::is_empty)
            && self.third_party.as_ref().map_or(true, BTreeMap::is_empty)
    }

    /// Fold a later edit into this one. Resets drop the stored override.
    pub fn absorb(&mut self, patch: SavedTemplate) {
        absorb_section(&mut self.palette, patch.palette);
        absorb_section(&mut self.browser, patch.browser);

        let Some(patch_items) = patch.third_party else {
            return;
        };
        let items = self.third_party.get_or_insert_with(BTreeMap::new);
        for (key, edit) in patch_items {
            match edit {
                Override::Unset => {}
                Override::Reset => {
                    items.remove(&key);
                }
                Override::Set(fields) => {
                    let stored = items.entry(key).or_insert(Override::Set(Default::default()));
                    let mut merged = match stored {
                        Override::Set(existing) => *existing,
                        _ => SavedThirdPartyItem::default(),
                    };
                    absorb_field(&mut merged.color_key, fields.color_key);
                    absorb_field(&mut merged.modifier, fields.modifier);
                    *stored = Override::Set(merged);
                }
            }
        }
    }
}

fn absorb_section<K: Ord, V>(
    target: &mut Option<BTreeMap<K, Override<V>>>,
    patch: Option<BTreeMap<K, Override<V>>>,
) {
    let Some(patch) = patch else {
        return;
    };
    let entries = target.get_or_insert_with(BTreeMap::new);
    for (key, edit) in patch {
        match edit {
            Override::Unset => {}
            Override::Reset => {
                entries.remove(&key);
            }
            set => {
                entries.insert(key, set);
            }
        }
    }
}

fn absorb_field<T>(target: &mut Override<T>, edit: Override<T>) {
    match edit {
        Override::Unset => {}
        Override::Reset => *target = Override::Unset,
        set => *target = set,
    }
}

/// Merge `saved` over `global`, producing the template used for generation.
pub fn resolve_template(
    global: &ColorschemeTemplate,
    saved: Option<&SavedTemplate>,
) -> ColorschemeTemplate {
    let mut effective = global.clone();
    let Some(saved) = saved else {
        return effective;
    };

    if let Some(palette) = &saved.palette {
        merge_section(&mut effective.palette, &global.palette, palette);
    }
    if let Some(browser) = &saved.browser {
        merge_section(&mut effective.browser, &global.browser, browser);
    }
    if let Some(items) = &saved.third_party {
        for (key, edit) in items {
            let fallback = global.third_party.get(key).copied();
            let merged = match edit {
                Override::Set(fields) => merge_third_party_item(fallback, fields),
                Override::Unset | Override::Reset => fallback,
            };
            match merged {
                Some(item) => effective.third_party.insert(*key, item),
                None => effective.third_party.remove(key),
            };
        }
    }

    effective
}

fn merge_section<K, V>(
    effective: &mut BTreeMap<K, V>,
    global: &BTreeMap<K, V>,
    saved: &BTreeMap<K, Override<V>>,
) where
    K: Ord + Copy,
    V: Copy,
{
    for (key, edit) in saved {
        match edit.apply(global.get(key).copied()) {
            Some(value) => effective.insert(*key, value),
            None => effective.remove(key),
        };
    }
}

fn merge_third_party_item(
    fallback: Option<ThirdPartyItem>,
    fields: &SavedThirdPartyItem,
) -> Option<ThirdPartyItem> {
    let color_key = fields.color_key.apply(fallback.map(|item| item.color_key))?;
    let modifier = match fields.modifier {
        Override::Set(modifier) => Some(modifier),
        Override::Unset | Override::Reset => fallback.and_then(|item| item.modifier),
    };
    Some(ThirdPartyItem {
        color_key,
        modifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::DEFAULT_THEME_DARK;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> SavedTemplate {
        serde_json::from_str(json).expect("saved template json")
    }

    #[test]
    fn explicit_null_resets_to_global_value() {
        let saved = parse(r#"{"palette": {"background": null}}"#);
        let effective = resolve_template(&DEFAULT_THEME_DARK, Some(&saved));

        assert_eq!(
            saved.palette.as_ref().unwrap()[&PaletteColor::Background],
            Override::Reset
        );
        assert_eq!(
            effective.palette[&PaletteColor::Background],
            DEFAULT_THEME_DARK.palette[&PaletteColor::Background]
        );
    }

    #[test]
    fn set_values_override_global_values() {
        let saved = parse(r#"{"palette": {"text": 7}, "browser": {"toolbar": "accentPrimary"}}"#);
        let effective = resolve_template(&DEFAULT_THEME_DARK, Some(&saved));

        assert_eq!(effective.palette[&PaletteColor::Text], 7);
        assert_eq!(
            effective.browser[&BrowserProperty::Toolbar],
            PaletteColor::AccentPrimary
        );
        assert_eq!(
            effective.palette[&PaletteColor::Background],
            DEFAULT_THEME_DARK.palette[&PaletteColor::Background]
        );
    }

    #[test]
    fn zero_index_is_a_real_override() {
        let saved = parse(r#"{"palette": {"text": 0}}"#);
        let effective = resolve_template(&DEFAULT_THEME_DARK, Some(&saved));
        assert_eq!(effective.palette[&PaletteColor::Text], 0);
    }

    #[test]
    fn null_top_level_sections_are_ignored() {
        let saved = parse(r#"{"palette": null, "browser": null, "thirdParty": null}"#);
        assert!(saved.is_empty());
        assert_eq!(
            resolve_template(&DEFAULT_THEME_DARK, Some(&saved)),
            *DEFAULT_THEME_DARK
        );
    }

    #[test]
    fn missing_saved_template_yields_global() {
        assert_eq!(resolve_template(&DEFAULT_THEME_DARK, None), *DEFAULT_THEME_DARK);
    }

    #[test]
    fn third_party_items_merge_field_by_field() {
        let saved = parse(r#"{"duckduckgo": {"kx": {"modifier": 0.5}, "kaa": {"modifier": null}}}"#);
        let effective = resolve_template(&DEFAULT_THEME_DARK, Some(&saved));

        let link = effective.third_party[&ThirdPartyKey::ResultLink];
        assert_eq!(link.color_key, PaletteColor::AccentSecondary);
        assert_eq!(link.modifier, Some(0.5));

        let visited = effective.third_party[&ThirdPartyKey::ResultLinkVisited];
        assert_eq!(visited.modifier, Some(0.2));
    }

    #[test]
    fn absorb_keeps_earlier_edits_and_drops_resets() {
        let mut saved = parse(r#"{"palette": {"text": 3, "background": 5}}"#);
        saved.absorb(parse(r#"{"palette": {"background": null, "textFocus": 1}}"#));

        let palette = saved.palette.as_ref().unwrap();
        assert_eq!(palette.get(&PaletteColor::Text), Some(&Override::Set(3)));
        assert_eq!(palette.get(&PaletteColor::TextFocus), Some(&Override::Set(1)));
        assert_eq!(palette.get(&PaletteColor::Background), None);
    }

    #[test]
    fn absorb_merges_third_party_fields() {
        let mut saved = parse(r#"{"thirdParty": {"kx": {"colorKey": "text"}}}"#);
        saved.absorb(parse(r#"{"thirdParty": {"kx": {"modifier": -0.1}}}"#));

        let item = saved.third_party.as_ref().unwrap()[&ThirdPartyKey::ResultLink];
        assert_eq!(
            item,
            Override::Set(SavedThirdPartyItem {
                color_key: Override::Set(PaletteColor::Text),
                modifier: Override::Set(-0.1),
            })
        );
    }

    #[test]
    fn serializes_resets_as_null() {
        let mut saved = SavedTemplate::default();
        saved.palette = Some(BTreeMap::from([
            (PaletteColor::Text, Override::Set(4)),
            (PaletteColor::Background, Override::Reset),
        ]));
        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["palette"]["text"], 4);
        assert!(json["palette"]["background"].is_null());
        assert!(json.get("browser").is_none());
    }
}
