use crate::keys::Binding;

/// Print the key binding table, grouped by mode, or as JSON.
pub fn print_keys(bindings: &[Binding], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(bindings)?);
        return Ok(());
    }

    let width = bindings
        .iter()
        .map(|b| b.keys.chars().count())
        .max()
        .unwrap_or(0);

    let mut current_mode = "";
    for binding in bindings {
        if binding.mode != current_mode {
            if !current_mode.is_empty() {
                println!();
            }
            println!("{}:", binding.mode);
            current_mode = binding.mode;
        }
        let pad = width.saturating_sub(binding.keys.chars().count());
        println!("  {}{}  {}", binding.keys, " ".repeat(pad), binding.action);
    }
    Ok(())
}
