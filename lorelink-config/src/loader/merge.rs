use toml::map::Entry;

/// Overlay `overlay` onto `base`, descending into tables present in both.
///
/// Arrays and scalars are replaced wholesale, so a higher layer's
/// `trace_targets = []` clears the list from a lower one.
pub fn merge_toml_values(base: &mut toml::Value, overlay: &toml::Value) {
    let (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) = (&mut *base, overlay)
    else {
        *base = overlay.clone();
        return;
    };

    for (key, value) in overlay_table {
        match base_table.entry(key.as_str()) {
            Entry::Occupied(mut slot) => merge_toml_values(slot.get_mut(), value),
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
            }
        }
    }
}
