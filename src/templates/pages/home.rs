// templates/pages/home.rs

use crate::domain::filter::{AGE_RANGE, AREA_RANGE, FEE_RANGE, RENT_RANGE};
use crate::domain::layout::{ALL_LAYOUTS, LAYOUT_ANY};
use crate::session::SuggestionSet;
use crate::templates::{card, desktop_layout, error_banner};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub suggestions: Option<&'a SuggestionSet>,
    pub error: Option<&'a str>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "おのぼりホームズ",
        html! {
            div class="wrap" {
                aside { (sidebar(vm)) }
                main {
                    @if let Some(msg) = vm.error {
                        (error_banner(msg))
                    }
                    @if let Some(set) = vm.suggestions {
                        h2 { "おすすめの駅と理由" }
                        p class="muted" { "取得時刻: " (set.fetched_at.format("%Y-%m-%d %H:%M")) }
                        @for s in &set.items {
                            (card(&s.station, html! { p { (s.reason) } }))
                        }
                    } @else {
                        p { "左の希望条件で物件を検索できます。職場の最寄り駅を入れて駅検索すると、穴場の駅が物件の絞り込みに使えます。" }
                    }
                }
            }
        },
    )
}

fn sidebar(vm: &HomeVm) -> Markup {
    html! {
        h2 { "希望条件" }
        form action="/search" method="get" {
            (range_field("家賃 (円)", "rent", RENT_RANGE, 1000))
            (range_field("管理費 (円)", "fee", FEE_RANGE, 1000))
            (range_field("築年数", "age", AGE_RANGE, 1))
            (range_field("面積 (m²)", "area", AREA_RANGE, 1))

            div class="field" {
                label for="layout" { "間取り" }
                select name="layout" id="layout" {
                    option value=(LAYOUT_ANY) { (LAYOUT_ANY) }
                    @for l in ALL_LAYOUTS {
                        option value=(l.as_str()) { (l.as_str()) }
                    }
                }
            }

            // Only meaningful once a suggestion list exists to pick from.
            @if vm.suggestions.is_some() {
                div class="field" {
                    label for="stations" { "興味がある駅（カンマ区切りで入力）" }
                    input type="text" name="stations" id="stations";
                }
            }

            button type="submit" { "物件サーチ" }
        }

        form action="/stations" method="get" {
            h3 { "穴場駅さがし" }
            div class="field" {
                label for="work_station" { "職場の最寄り駅" }
                input type="text" name="work_station" id="work_station";
            }
            div class="field" {
                label for="commuting_time" { "職場の最寄り駅までの所要時間 (分)" }
                input type="number" name="commuting_time" id="commuting_time"
                    min="1" max="60" value="10";
            }
            button type="submit" { "駅検索スタート" }
        }
    }
}

fn range_field(label: &str, name: &str, (lo, hi): (i64, i64), step: i64) -> Markup {
    html! {
        div class="field" {
            label { (label) }
            div class="range" {
                input type="number" name=(format!("{name}_min"))
                    min=(lo) max=(hi) step=(step) value=(lo);
                span { "〜" }
                input type="number" name=(format!("{name}_max"))
                    min=(lo) max=(hi) step=(step) value=(hi);
            }
        }
    }
}
