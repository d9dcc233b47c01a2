use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::BooleanArray;
use arrow::array::Float64Array;
use arrow::array::Int64Array;
use arrow::array::StringArray;
use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use common::types::COLUMN_ADDITIONAL_EVENTS;
use common::types::COLUMN_CHECKOUT_DATE;
use common::types::COLUMN_DAY;
use common::types::COLUMN_EMAIL;
use common::types::COLUMN_GMV_TIER;
use common::types::COLUMN_MATCHED_WITHOUT_SONAR;
use common::types::COLUMN_MATCHED_WITH_SONAR;
use common::types::COLUMN_PERCENT_INCREASE;
use common::types::COLUMN_SHOP_NAME;
use common::types::COLUMN_SONAR_CONVERTED_USD;
use common::types::COLUMN_TOTAL_CONVERTED_USD;
use common::types::COLUMN_VISITOR_NAME;
use common::types::COLUMN_WITHOUT_SONAR;
use common::types::COLUMN_WITH_SONAR;
use common::types::EXPORT_COLUMN_DAY;
use common::types::EXPORT_COLUMN_FLOWS_WITHOUT_SONAR;
use common::types::EXPORT_COLUMN_FLOWS_WITH_SONAR;
use common::types::EXPORT_COLUMN_REVENUE_WITHOUT_SONAR;
use common::types::EXPORT_COLUMN_REVENUE_WITH_SONAR;

use crate::error::Result;
use crate::series::DailySample;
use crate::series::Series;
use crate::series::SeriesKind;
use crate::store::shops::ShopLeaderboardRow;
use crate::store::visitors::VisitorRecord;

fn batch(fields: Vec<Field>, cols: Vec<ArrayRef>) -> Result<RecordBatch> {
    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}

fn day_col(series: &Series) -> ArrayRef {
    Arc::new(Int64Array::from_iter_values(
        series.samples().iter().map(|s| s.day as i64),
    ))
}

/// `Day | Without Sonar | With Sonar` for one chart.
pub fn series_batch(series: &Series, kind: SeriesKind) -> Result<RecordBatch> {
    let (baseline, uplifted): (Vec<f64>, Vec<f64>) =
        series.samples().iter().map(|s| s.pair(kind)).unzip();

    batch(
        vec![
            Field::new(COLUMN_DAY, DataType::Int64, false),
            Field::new(COLUMN_WITHOUT_SONAR, DataType::Float64, false),
            Field::new(COLUMN_WITH_SONAR, DataType::Float64, false),
        ],
        vec![
            day_col(series),
            Arc::new(Float64Array::from(baseline)),
            Arc::new(Float64Array::from(uplifted)),
        ],
    )
}

/// All four generated columns, keyed by day.
pub fn export_batch(series: &Series) -> Result<RecordBatch> {
    let samples = series.samples();
    let col = |f: fn(&DailySample) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(samples.iter().map(f)))
    };

    batch(
        vec![
            Field::new(EXPORT_COLUMN_DAY, DataType::Int64, false),
            Field::new(EXPORT_COLUMN_FLOWS_WITHOUT_SONAR, DataType::Float64, false),
            Field::new(EXPORT_COLUMN_FLOWS_WITH_SONAR, DataType::Float64, false),
            Field::new(EXPORT_COLUMN_REVENUE_WITHOUT_SONAR, DataType::Float64, false),
            Field::new(EXPORT_COLUMN_REVENUE_WITH_SONAR, DataType::Float64, false),
        ],
        vec![
            day_col(series),
            col(|s| s.flows_baseline),
            col(|s| s.flows_uplifted),
            col(|s| s.revenue_baseline),
            col(|s| s.revenue_uplifted),
        ],
    )
}

pub fn visitors_batch(visitors: &[VisitorRecord]) -> Result<RecordBatch> {
    let strings = |f: fn(&VisitorRecord) -> &'static str| -> ArrayRef {
        Arc::new(StringArray::from_iter_values(visitors.iter().map(f)))
    };
    let bools = |f: fn(&VisitorRecord) -> bool| -> ArrayRef {
        Arc::new(BooleanArray::from(visitors.iter().map(f).collect::<Vec<_>>()))
    };

    batch(
        vec![
            Field::new(COLUMN_VISITOR_NAME, DataType::Utf8, false),
            Field::new(COLUMN_EMAIL, DataType::Utf8, false),
            Field::new(COLUMN_CHECKOUT_DATE, DataType::Utf8, false),
            Field::new(COLUMN_MATCHED_WITHOUT_SONAR, DataType::Boolean, false),
            Field::new(COLUMN_MATCHED_WITH_SONAR, DataType::Boolean, false),
            Field::new(COLUMN_ADDITIONAL_EVENTS, DataType::Int64, false),
        ],
        vec![
            strings(|v| v.name),
            strings(|v| v.email),
            strings(|v| v.checkout_date),
            bools(|v| v.matched_without_sonar),
            bools(|v| v.matched_with_sonar),
            Arc::new(Int64Array::from_iter_values(
                visitors
                    .iter()
                    .map(|v| v.additional_event_captured() as i64),
            )),
        ],
    )
}

/// Leaderboard with every column already formatted for display.
pub fn shops_batch(shops: &[ShopLeaderboardRow]) -> Result<RecordBatch> {
    let strings = |f: fn(&ShopLeaderboardRow) -> String| -> ArrayRef {
        Arc::new(StringArray::from_iter_values(shops.iter().map(f)))
    };

    batch(
        vec![
            Field::new(COLUMN_SHOP_NAME, DataType::Utf8, false),
            Field::new(COLUMN_GMV_TIER, DataType::Utf8, false),
            Field::new(COLUMN_TOTAL_CONVERTED_USD, DataType::Utf8, false),
            Field::new(COLUMN_SONAR_CONVERTED_USD, DataType::Utf8, false),
            Field::new(COLUMN_PERCENT_INCREASE, DataType::Utf8, false),
        ],
        vec![
            strings(|s| s.shop_name.to_string()),
            strings(|s| s.gmv_tier.to_string()),
            strings(|s| s.total_converted_display()),
            strings(|s| s.sonar_converted_display()),
            strings(|s| s.percent_increase_display()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use arrow::array::Array;
    use arrow::array::AsArray;
    use arrow::datatypes::Int64Type;

    use super::*;
    use crate::store::shops::top_shops;
    use crate::store::visitors::visitors;

    #[test]
    fn test_visitors_batch() -> Result<()> {
        let rb = visitors_batch(visitors())?;
        assert_eq!(rb.num_rows(), 7);
        assert_eq!(rb.num_columns(), 6);
        assert_eq!(rb.schema().field(5).name(), COLUMN_ADDITIONAL_EVENTS);

        let captured = rb.column(5).as_primitive::<Int64Type>();
        assert_eq!(captured.values().to_vec(), vec![0, 1, 0, 0, 1, 1, 0]);

        Ok(())
    }

    #[test]
    fn test_shops_batch() -> Result<()> {
        let rb = shops_batch(top_shops())?;
        assert_eq!(rb.num_rows(), 10);

        let total = rb.column(2).as_string::<i32>();
        let pct = rb.column(4).as_string::<i32>();
        assert_eq!(total.value(0), "$1,561,120.00");
        assert_eq!(pct.value(0), "23.57%");
        assert_eq!(pct.len(), 10);

        Ok(())
    }
}
