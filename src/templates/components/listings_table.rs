use maud::{html, Markup};

use crate::domain::listing::ListingRecord;
use crate::templates::components::format::{dollars, thousands};

/// Collapsible table of listings with a record count underneath.
pub fn listings_table(title: &str, caption: Option<&str>, listings: &[&ListingRecord]) -> Markup {
    html! {
        details class="listings-table" {
            summary { (title) }
            @if let Some(c) = caption {
                p class="caption" { em { (c) } }
            }
            div class="table-scroll" {
                table {
                    thead {
                        tr {
                            th { "zpid" }
                            th { "Address" }
                            th { "Zipcode" }
                            th { "Square Footage" }
                            th { "Bedrooms" }
                            th { "HomeType" }
                            th { "ListedPrice" }
                            th { "Zestimate" }
                            th { "ZDelta" }
                            th { "LastUpdated" }
                            th { "latitude" }
                            th { "longitude" }
                        }
                    }
                    tbody {
                        @for l in listings {
                            tr {
                                td { (l.id) }
                                td { (l.address) }
                                td { (l.zip_code) }
                                td class="num" { (thousands(l.square_footage)) }
                                td class="num" { (l.bedrooms) }
                                td { (l.home_type) }
                                td class="num" { (dollars(l.listed_price)) }
                                td class="num" { (dollars(l.zestimate)) }
                                td class="num" { (dollars(l.value_delta as f64)) }
                                td { (l.last_updated) }
                                td class="num" { (l.latitude) }
                                td class="num" { (l.longitude) }
                            }
                        }
                    }
                }
            }
            p class="caption" { "Number of Records: " (listings.len()) }
        }
    }
}
