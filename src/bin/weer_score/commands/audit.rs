// ABOUTME: Label audit command for weer-score
// ABOUTME: Compares a translated label table with a built-in reference locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weer Activity Contributors

use serde_json::json;
use std::path::Path;
use tracing::{info, warn};
use weer_activity_score::errors::{AppError, AppResult, ErrorCode};
use weer_activity_score::intelligence::{audit_labels, LabelTable, Locale};

use crate::helpers::output::print_json;

/// Audit `table_path` against `reference`; `strict` turns findings into an error
pub fn run(table_path: &Path, reference: &str, strict: bool) -> AppResult<()> {
    let reference_locale = Locale::from_tag(reference).ok_or_else(|| {
        AppError::invalid_input(format!("no built-in labels for reference locale '{reference}'"))
    })?;
    let table = LabelTable::from_file(table_path)?;
    let audit = audit_labels(&table, &LabelTable::from_locale(reference_locale));

    print_json(&audit)?;

    if audit.is_clean() {
        info!(table = %table_path.display(), reference = %reference_locale, "Label table is clean");
        return Ok(());
    }

    warn!(
        missing = audit.missing.len(),
        unknown = audit.unknown.len(),
        untranslated = audit.untranslated.len(),
        title_case = audit.title_case.len(),
        "Label audit found issues"
    );
    if strict {
        return Err(AppError::new(ErrorCode::InvalidLabels, "label audit found issues")
            .with_details(json!({
                "missing": audit.missing.len(),
                "unknown": audit.unknown.len(),
                "untranslated": audit.untranslated.len(),
                "titleCase": audit.title_case.len(),
            })));
    }
    Ok(())
}
