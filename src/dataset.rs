//! Dataset transformations feeding the categorical bar charts.
//!
//! The only mutation in the whole run happens here: deriving a readable
//! `Sex` label from the one-hot `Sex_female` column produced by the
//! upstream cleaning step.

use crate::error::Result;
use crate::utils::{any_value_label, require_column};
use polars::prelude::*;
use tracing::debug;

/// Derive a categorical `Sex` column from the one-hot `Sex_female` column.
///
/// `Sex_female == 1` maps to `"female"`; every other value (including null)
/// maps to `"male"`. Fails with `ColumnNotFound` if `Sex_female` is absent.
pub fn derive_sex_column(df: &mut DataFrame) -> Result<()> {
    let flags = require_column(df, "Sex_female")?.cast(&DataType::Float64)?;
    let labels: Vec<&str> = flags
        .f64()?
        .into_iter()
        .map(|v| match v {
            Some(flag) if flag == 1.0 => "female",
            _ => "male",
        })
        .collect();

    debug!("Derived Sex labels for {} rows", labels.len());
    df.with_column(Series::new("Sex".into(), labels))?;
    Ok(())
}

/// Mean of `target` per distinct value of `group`, sorted by group value.
///
/// For a 0/1 target this is the survival rate per category.
pub fn rate_by_group(df: &DataFrame, group: &str, target: &str) -> Result<Vec<(String, f64)>> {
    // Check up front for precise errors; polars reports missing columns
    // only deep inside the lazy plan.
    require_column(df, group)?;
    require_column(df, target)?;

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(group)])
        .agg([col(target).mean().alias("rate")])
        .sort([group], Default::default())
        .collect()?;

    let keys = grouped.column(group)?.as_materialized_series();
    let rates = grouped.column("rate")?.as_materialized_series().f64()?;

    let mut result = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let label = any_value_label(&keys.get(i)?);
        let rate = rates.get(i).unwrap_or(0.0);
        result.push((label, rate));
    }
    Ok(result)
}
