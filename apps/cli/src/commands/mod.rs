use crate::args::PairArgs;
use anyhow::{Context, Result};
use serde_json::{Value, json};
use shutter_kernel::domain::navigation::RouteState;
use shutter_mapper::Registry;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Route state seen by the resolvers, built from `--param` and `--query` pairs.
pub(crate) fn route(params: &[(String, String)], query: &[(String, String)]) -> RouteState {
    let route = params
        .iter()
        .fold(RouteState::new(), |route, (key, value)| route.with_param(key, value));
    query.iter().fold(route, |route, (key, value)| route.with_query(key, value))
}

/// Maps the input payload through the `(from, to)` resolver and prints the result.
///
/// # Errors
/// Returns an error if the input cannot be read or parsed, or if mapping fails.
pub(crate) fn map(
    registry: &Registry,
    pair: &PairArgs,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let input = read_json(pair.input.as_deref(), stdin)?;
    debug!(from = %pair.from, to = %pair.to, "Mapping payload");

    let mapped = registry
        .map(&input, &pair.from, &pair.to)
        .with_context(|| format!("Mapping {} -> {} failed", pair.from, pair.to))?;
    print_json(out, &mapped)
}

/// Hydrates a component (default `{}`) from the input response and prints it.
///
/// # Errors
/// Returns an error if either file cannot be read or parsed, or if hydration fails.
pub(crate) fn hydrate(
    registry: &Registry,
    pair: &PairArgs,
    component: Option<&Path>,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    let response = read_json(pair.input.as_deref(), stdin)?;
    let mut component = match component {
        Some(path) => read_file(path)?,
        None => json!({}),
    };

    let hydrated = registry
        .hydrate(&response, &mut component, &pair.from, &pair.to)
        .with_context(|| format!("Hydrating {} -> {} failed", pair.from, pair.to))?;
    print_json(out, hydrated)
}

/// Prints every registered pair with its resolver kind, one per line.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub(crate) fn pairs(registry: &Registry, out: &mut impl Write) -> Result<()> {
    for (key, kind) in registry.pairs() {
        writeln!(out, "{:<24} {:<24} {kind}", key.source, key.target)?;
    }
    Ok(())
}

fn read_json(path: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    if let Some(path) = path {
        return read_file(path);
    }
    let mut raw = String::new();
    stdin.read_to_string(&mut raw).context("Failed to read stdin")?;
    serde_json::from_str(&raw).context("Input on stdin is not valid JSON")
}

fn read_file(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("'{}' is not valid JSON", path.display()))
}

fn print_json(out: &mut impl Write, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
