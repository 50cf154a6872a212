// templates/pages/results.rs

use crate::domain::listing::Listing;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn results_page(matched: &[&Listing]) -> Markup {
    desktop_layout(
        "検索結果 | おのぼりホームズ",
        html! {
            div class="wrap" {
                main {
                    h2 { "検索結果" }
                    p { "フィルタリング後の物件数: " (matched.len()) }

                    @if !matched.is_empty() {
                        table {
                            thead {
                                tr {
                                    th { "名称" }
                                    th { "アドレス" }
                                    th { "築年数" }
                                    th { "家賃" }
                                    th { "間取り" }
                                    th { "面積" }
                                    th { "駅名1" }
                                    th { "徒歩分1" }
                                    th { "物件画像" }
                                    th { "間取画像" }
                                    th { "詳細" }
                                }
                            }
                            tbody {
                                @for l in matched {
                                    tr {
                                        td { (l.name) }
                                        td { (l.address) }
                                        td { (l.age) }
                                        td { (l.rent) }
                                        td { (l.layout) }
                                        td { (l.area) }
                                        td { @if let Some(s) = &l.station1 { (s) } }
                                        td { @if let Some(w) = l.walk1 { (w) } }
                                        td { @if let Some(u) = &l.photo_url { a href=(u) target="_blank" { "画像" } } }
                                        td { @if let Some(u) = &l.floorplan_url { a href=(u) target="_blank" { "間取図" } } }
                                        td { @if let Some(u) = &l.detail_url { a href=(u) target="_blank" { "リンク" } } }
                                    }
                                }
                            }
                        }
                    }

                    p { a href="/" { "← 条件に戻る" } }
                }
            }
        },
    )
}
