use super::defaults;
use super::errors::ConfigError;
use super::models::CardLabels;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<motdcard_events::EventBus>>,
) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref())
        .await
        .map_err(ConfigError::IoError)?;
    let mut doc = content
        .parse::<DocumentMut>()
        .map_err(ConfigError::TomlEditError)?;
    let added_fields = migrate_document(&mut doc)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(motdcard_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn migrate_document(doc: &mut DocumentMut) -> anyhow::Result<Vec<String>> {
    let mut added_fields = Vec::new();

    migrate_server_section(doc, &mut added_fields)?;
    migrate_query_section(doc, &mut added_fields)?;
    migrate_render_section(doc, &mut added_fields)?;

    Ok(added_fields)
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let server = ensure_table(doc.as_table_mut(), "server", "server", added_fields)?;

    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(5000), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(defaults::tcp_nodelay()), added_fields);
    ensure_field(server, "timeout_secs", Value::from(defaults::timeout_secs() as i64), added_fields);
    ensure_field(
        server,
        "max_concurrent_requests",
        Value::from(defaults::max_concurrent_requests() as i64),
        added_fields,
    );
    ensure_field(
        server,
        "enable_compression",
        Value::from(defaults::enable_compression()),
        added_fields,
    );

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_query_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let query = ensure_table(doc.as_table_mut(), "query", "query", added_fields)?;

    ensure_field(
        query,
        "connect_timeout_ms",
        Value::from(defaults::connect_timeout_ms() as i64),
        added_fields,
    );
    ensure_field(
        query,
        "read_timeout_ms",
        Value::from(defaults::read_timeout_ms() as i64),
        added_fields,
    );
    ensure_field(
        query,
        "protocol_version",
        Value::from(defaults::protocol_version() as i64),
        added_fields,
    );
    ensure_field(
        query,
        "default_port",
        Value::from(defaults::default_port() as i64),
        added_fields,
    );
    ensure_field(query, "srv_lookup", Value::from(defaults::srv_lookup()), added_fields);

    Ok(())
}

fn migrate_render_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<()> {
    let render = ensure_table(doc.as_table_mut(), "render", "render", added_fields)?;

    ensure_field(render, "card", Value::from(defaults::card_variant().as_str()), added_fields);
    ensure_field(render, "max_scale", Value::from(defaults::max_scale()), added_fields);

    let font_defaults = defaults::font_paths();
    let fonts = ensure_table(render, "fonts", "render.fonts", added_fields)?;
    ensure_field(fonts, "title", Value::from(font_defaults.title.as_str()), added_fields);
    ensure_field(fonts, "subtitle", Value::from(font_defaults.subtitle.as_str()), added_fields);
    ensure_field(fonts, "label", Value::from(font_defaults.label.as_str()), added_fields);
    ensure_field(fonts, "value", Value::from(font_defaults.value.as_str()), added_fields);
    ensure_field(fonts, "motd", Value::from(font_defaults.motd.as_str()), added_fields);

    let label_defaults = CardLabels::default();
    let labels = ensure_table(render, "labels", "render.labels", added_fields)?;
    for (key, value) in [
        ("caption", &label_defaults.caption),
        ("section", &label_defaults.section),
        ("status", &label_defaults.status),
        ("online", &label_defaults.online),
        ("offline", &label_defaults.offline),
        ("version", &label_defaults.version),
        ("players", &label_defaults.players),
        ("latency", &label_defaults.latency),
        ("motd", &label_defaults.motd),
    ] {
        ensure_field(labels, key, Value::from(value.as_str()), added_fields);
    }

    Ok(())
}

fn ensure_table<'a>(
    parent: &'a mut Table,
    key: &str,
    display_name: &str,
    added_fields: &mut Vec<String>,
) -> anyhow::Result<&'a mut Table> {
    if !parent.contains_key(key) {
        let mut table = Table::new();
        table.set_implicit(true);
        parent[key] = Item::Table(table);
        added_fields.push(display_name.to_string());
    }

    parent[key]
        .as_table_mut()
        .ok_or_else(|| anyhow::anyhow!("Invalid [{}] section in config", display_name))
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    added_fields: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        added_fields.push(key.to_string());
    }
}
