use std::io::{self, Write};

use super::{ChartKind, DashboardView};

const BAR_WIDTH: usize = 40;

/// Writes `view` as plain text: ticker list, metric strip, chart rows and headlines.
pub fn render_plain<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    writeln!(out, "AI Market Intelligence Dashboard")?;
    writeln!(out, "================================")?;
    writeln!(out)?;

    let Some(ticker) = view.ticker.as_deref() else {
        writeln!(out, "No stock data available.")?;
        return render_articles(view, out);
    };

    let list: Vec<String> = view
        .tickers
        .iter()
        .map(|t| if t == ticker { format!("[{t}]") } else { t.clone() })
        .collect();
    writeln!(out, "Tickers: {}", list.join(" "))?;

    if let Some(m) = &view.metrics {
        writeln!(
            out,
            "1-Day %: {}   5-Day %: {}   Last Close: {}   (as of {})",
            m.change_1d_text(),
            m.change_5d_text(),
            m.close_text(),
            m.date
        )?;
    }
    writeln!(out)?;

    let toggles: Vec<String> = ChartKind::ALL
        .iter()
        .map(|k| {
            if *k == view.chart {
                format!("[{}]", k.label())
            } else {
                k.label().to_string()
            }
        })
        .collect();
    writeln!(out, "{}    {}", view.chart_title, toggles.join(" "))?;
    render_chart(view, out)?;
    writeln!(out)?;

    render_articles(view, out)
}

fn render_chart<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    if view.points.is_empty() {
        return writeln!(out, "  (no data)");
    }

    let (min, max) = view
        .points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
            (lo.min(*v), hi.max(*v))
        });
    // bars grow from zero; lines are scaled between the visible extremes
    let floor = if view.chart.is_bar() { 0.0_f64.min(min) } else { min };
    let span = (max - floor).max(f64::EPSILON);

    for (date, value) in &view.points {
        let filled = (((value - floor) / span) * BAR_WIDTH as f64).round() as usize;
        let marker = if view.chart.is_bar() { "#" } else { "*" };
        let bar = if view.chart.is_bar() {
            marker.repeat(filled.max(1))
        } else {
            format!("{}{marker}", " ".repeat(filled.min(BAR_WIDTH)))
        };
        writeln!(out, "  {date}  {:>14}  {bar}", format_value(view.chart, *value))?;
    }
    Ok(())
}

fn render_articles<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Latest AI Headlines ({} of up to {})",
        view.articles.len(),
        view.max_articles
    )?;
    writeln!(out, "--------------------------------")?;
    if view.articles.is_empty() {
        return writeln!(out, "No headlines available.");
    }
    for art in &view.articles {
        writeln!(out, "{} | {} ({})", art.date, art.title, art.source)?;
        writeln!(out, "    {}", art.url)?;
        if !art.desc.is_empty() {
            writeln!(out, "    {}", art.desc)?;
        }
    }
    Ok(())
}

pub(super) fn format_value(chart: ChartKind, value: f64) -> String {
    match chart {
        ChartKind::Price => format!("${value:.2}"),
        ChartKind::Change1d => format!("{value:.2}%"),
        ChartKind::Volume => format!("{value:.0}"),
    }
}
