use polars::prelude::*;

use crate::core::PriceBar;

/// Trait for converting collected tables into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the rows into a Polars DataFrame using the persisted column names.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for [PriceBar] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates: Vec<String> = self.iter().map(|r| r.date.to_string()).collect();
        let tickers: Vec<&str> = self.iter().map(|r| r.ticker.as_str()).collect();
        let close: Vec<f64> = self.iter().map(|r| r.close).collect();
        let high: Vec<f64> = self.iter().map(|r| r.high).collect();
        let low: Vec<f64> = self.iter().map(|r| r.low).collect();
        let volume: Vec<u64> = self.iter().map(|r| r.volume).collect();
        let d1: Vec<Option<f64>> = self.iter().map(|r| r.pct_change_1d).collect();
        let d5: Vec<Option<f64>> = self.iter().map(|r| r.pct_change_5d).collect();
        let vol: Vec<Option<f64>> = self.iter().map(|r| r.rolling_volatility).collect();

        df!(
            "Date" => dates,
            "Ticker" => tickers,
            "Close" => close,
            "High" => high,
            "Low" => low,
            "Volume" => volume,
            "% Change (1d)" => d1,
            "% Change (5d)" => d5,
            "Rolling Volatility" => vol,
        )
    }
}
