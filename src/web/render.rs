//! HTML rendering for the two screens.
//!
//! Pages are assembled from string fragments; every dynamic value passes
//! through `html_escape` before it is written out.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::config::Config;
use crate::domain::{ProfitFigures, ProfitSummary, MAX_AMOUNT};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Quick period buttons; only the first is highlighted
const QUICK_PERIODS: [&str; 4] = ["今日", "今週", "今月", "今年"];

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{TAILWIND_CDN}"></script>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape::encode_text(title),
    )
}

// =========================================================================
// Input screen
// =========================================================================

/// Raw values typed into the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputValues {
    pub cash: String,
    pub credit: String,
}

fn amount_field(name: &str, label: &str, placeholder: &str, value: &str, extra_class: &str) -> String {
    format!(
        r#"<label class="{extra_class}block text-sm font-medium text-gray-700">
{label}
<input type="number" name="{name}" inputmode="numeric" min="1" max="{MAX_AMOUNT}" step="1" required value="{value}" class="mt-1 w-full rounded-md border border-gray-300 p-2" placeholder="{placeholder}">
</label>"#,
        value = html_escape::encode_double_quoted_attribute(value),
    )
}

/// Render the entry form, optionally with the validation message.
pub fn render_input_page(values: &InputValues, error: Option<&str>) -> String {
    let alert = error
        .map(|message| {
            format!(
                r#"<p role="alert" class="mt-2 text-sm text-red-600">{}</p>"#,
                html_escape::encode_text(message)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<main class="flex min-h-screen items-center justify-center bg-gray-100 p-4">
<form method="post" action="/" class="w-full max-w-sm rounded-2xl bg-white p-6 shadow">
<h1 class="mb-6 text-center text-xl font-bold text-black">儲けたい金額を入力</h1>
{cash}
{credit}
{alert}
<button type="submit" class="mt-6 w-full rounded-lg bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 disabled:opacity-50">実行</button>
</form>
</main>"#,
        cash = amount_field("cash", "現物 (円)", "例: 500000", &values.cash, ""),
        credit = amount_field("credit", "信用 (円)", "例: 250000", &values.credit, "mt-4 "),
    );

    page("儲けたい金額を入力", &body)
}

// =========================================================================
// Profit screen
// =========================================================================

/// Decorative phone status bar values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    pub time: String,
    pub battery_percent: u8,
    pub network_label: String,
}

impl StatusBar {
    pub fn new(config: &Config, now: &DateTime<FixedOffset>) -> Self {
        Self {
            time: now.format("%H:%M").to_string(),
            battery_percent: config.battery_percent,
            network_label: config.network_label.clone(),
        }
    }

    /// Width of the battery fill inside the 18-unit gauge
    pub fn battery_fill_width(&self) -> f32 {
        f32::from(self.battery_percent) / 100.0 * 18.0
    }
}

/// Everything the profit screen shows
#[derive(Debug, Clone)]
pub struct ProfitView {
    pub figures: ProfitFigures,
    pub summary: ProfitSummary,
    pub status_bar: StatusBar,
    pub today: NaiveDate,
}

fn render_status_bar(status: &StatusBar) -> String {
    format!(
        r##"<div class="px-3 py-[6px] flex items-center justify-between text-[12px] text-gray-800 bg-white border-b border-gray-200">
<span class="font-medium tracking-wide w-10">{time}</span>
<div class="flex items-center space-x-1">
<svg viewBox="0 0 24 24" width="18" height="18" fill="currentColor" aria-label="LINE" class="text-gray-700"><circle cx="12" cy="12" r="9"/><path d="M15.5 8.8c0-.8-.8-1.4-1.7-1.4H10.2c-.9 0-1.7.6-1.7 1.4v3c0 .8.8 1.4 1.7 1.4h.4L12 15l1.4-1.8h.4c.9 0 1.7-.6 1.7-1.4v-3z" fill="#fff"/></svg>
<span class="text-xl leading-none">•</span>
<svg viewBox="0 0 24 24" width="20" height="20" aria-label="signal" class="text-gray-700"><path d="M2 18h2v3H2zM6 14h2v7H6zM10 10h2v11h-2zM14 6h2v15h-2zM18 2h2v19h-2z"/></svg>
<span class="mr-1">{network}</span>
<svg viewBox="0 0 28 14" width="26" height="14" aria-label="battery" class="text-gray-700"><rect x="1" y="1" width="22" height="12" rx="2" ry="2" stroke="currentColor" stroke-width="2" fill="none"/><rect x="24" y="4" width="3" height="6" rx="1" fill="currentColor"/><rect x="3" y="3" width="{fill:.2}" height="8" rx="1" fill="currentColor"/></svg>
<span>{battery}%</span>
</div>
</div>"##,
        time = html_escape::encode_text(&status.time),
        network = html_escape::encode_text(&status.network_label),
        fill = status.battery_fill_width(),
        battery = status.battery_percent,
    )
}

fn render_period_selector(today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();
    let buttons: String = QUICK_PERIODS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == 0 {
                "bg-[#0060C4] text-white"
            } else {
                "bg-white border border-[#0060C4] text-[#0060C4]"
            };
            format!(r#"<button type="button" class="px-4 py-1 rounded text-xs font-medium {style}">{label}</button>"#)
        })
        .collect();

    format!(
        r#"<section class="mx-4 my-4 rounded-md bg-[#F5F8FC] px-4 pt-4 pb-6 shadow-inner text-sm">
<h2 class="font-semibold mb-3 text-black">期間</h2>
<div class="flex items-center space-x-8 mb-4">
<label class="flex items-center space-x-2"><input type="radio" name="dateType" checked class="h-4 w-4 accent-blue-600"><span class="text-gray-900">約定日</span></label>
<label class="flex items-center space-x-2"><input type="radio" name="dateType" class="h-4 w-4 accent-blue-600"><span class="text-gray-900">受渡日</span></label>
</div>
<div>
<input type="date" class="w-full h-6 rounded border border-[#CDD5DF] bg-white px-1 py-0 text-black text-xs" value="{today}">
<span class="block ml-1">から</span>
<input type="date" class="w-full h-6 rounded border border-[#CDD5DF] bg-white px-1 py-0 text-black text-xs" value="{today}">
</div>
<div class="mt-4 flex items-center gap-2">{buttons}</div>
<button type="button" class="mt-6 mx-auto block w-[150px] rounded-md bg-[#4B6FC1] py-1 text-white font-semibold shadow shadow-blue-200/60">照会</button>
</section>"#
    )
}

fn render_result_row(title: &str, linked: bool, display: &str, tone: &str) -> String {
    let heading = if linked {
        format!(
            r#"<p class="flex items-center space-x-1 text-[#0046A6] font-medium"><span>{title}</span><span>&gt;</span></p>"#
        )
    } else {
        format!(r#"<p class="flex items-center space-x-1 text-black font-medium"><span>{title}</span></p>"#)
    };

    format!(
        r#"<div class="grid grid-cols-[1fr_auto] mx-4 py-3 border-t border-gray-400">
<div>
{heading}
<p class="text-gray-500 mt-1">実現損益(税引前)</p>
</div>
<div class="flex flex-col items-end">
<span class="text-[#0060C4] leading-none font-bold">＋</span>
<p class="mt-1 {tone}">{display}</p>
</div>
</div>"#,
        display = html_escape::encode_text(display),
    )
}

/// Render the mock realized profit/loss screen.
pub fn render_profit_page(view: &ProfitView) -> String {
    // all rows follow the sign of the total
    let tone = if view.figures.is_gain() {
        "text-rose-600"
    } else {
        "text-blue-600"
    };

    let rows = [
        render_result_row("国内株式(現物)", true, &view.summary.cash_display, tone),
        render_result_row("国内株式(信用)", true, &view.summary.credit_display, tone),
        render_result_row("合計", false, &view.summary.total_display, tone),
    ]
    .join("\n");

    let body = format!(
        r##"<div class="bg-gray-100">
<p class="text-center text-black font-bold bg-gray-100 pt-10">こちらの写真をSNSにアップロードしたらあなたも億万長者！</p>
<p class="text-center text-black font-bold mb-4 bg-gray-100 pt-2">...というのは冗談ですが、SNSでシェアされている画像もこのように簡単に偽造できるので注意しましょうという。</p>
<div class="min-h-screen flex items-start justify-center bg-gray-100 py-8">
<div class="w-[375px] bg-white shadow rounded-lg overflow-hidden font-sans">
{status_bar}
<header class="mx-4 py-3 border-t border-blue-500 mt-4"><h1 class="font-semibold text-black p-0">実現損益</h1></header>
{period}
<section class="text-sm">
{rows}
</section>
<section class="p-4 space-y-4 flex flex-col items-end">
<a href="#" class="text-[#0046A6] text-xs font-medium flex items-center">配当金・分配金履歴はこちら &gt;</a>
</section>
<section class="p-4 space-y-4 flex flex-col items-center">
<button type="button" class="border rounded py-1 px-4 text-[#0046A6] border-[#0046A6]">詳細条件で検索 &gt;</button>
</section>
</div>
</div>
</div>"##,
        status_bar = render_status_bar(&view.status_bar),
        period = render_period_selector(view.today),
    );

    page("実現損益", &body)
}
