use crate::templates::{card, desktop_layout, error_panel, stat_tile};
use maud::{html, Markup, PreEscaped};

const PROPERTY_TYPES: [(&str, &str); 4] = [
    ("", "Any type"),
    ("house", "House"),
    ("unit", "Unit"),
    ("townhouse", "Townhouse"),
];

// Renders the JSON from /api/suburb/properties into the page.
const SCRIPT: &str = r#"
const fmt = (v, digits = 0) => v === null || v === undefined ? "–" : Number(v).toLocaleString(undefined, { maximumFractionDigits: digits });

function text(tag, value, cls) {
  const el = document.createElement(tag);
  el.textContent = value;
  if (cls) el.className = cls;
  return el;
}

function renderBins(bins) {
  const root = document.getElementById("price-bins");
  root.replaceChildren();
  const max = Math.max(1, ...bins.map(b => b.count));
  for (const b of bins) {
    const row = text("div", "", "bar-row");
    row.append(text("span", b.label, "bar-label"));
    const bar = text("div", "", "bar");
    bar.style.width = `${(b.count / max) * 300}px`;
    row.append(bar, text("span", b.count));
    root.append(row);
  }
}

function renderListings(listings) {
  const root = document.getElementById("listings");
  root.replaceChildren();
  for (const l of listings) {
    const c = text("div", "", "card");
    c.append(
      text("h3", l.address || "Address withheld"),
      text("p", l.price_text),
      text("p", `${l.bedrooms ?? "–"} bed · ${l.bathrooms ?? "–"} bath · ${l.car_spaces ?? "–"} car`),
      text("p", [l.property_type, l.land_size, l.listing_date].filter(Boolean).join(" · ")),
      text("p", l.description),
    );
    root.append(c);
  }
}

document.getElementById("search").addEventListener("submit", async (ev) => {
  ev.preventDefault();
  const params = new URLSearchParams(new FormData(ev.target));
  const error = document.getElementById("search-error");
  error.textContent = "";
  const resp = await fetch(`/api/suburb/properties?${params}`);
  const body = await resp.json();
  if (!resp.ok) {
    error.textContent = body.error || `Request failed (${resp.status})`;
    return;
  }
  const s = body.summary;
  document.getElementById("stat-count").textContent = s.count;
  document.getElementById("stat-price").textContent = s.median_price === null ? "–" : `$${fmt(s.median_price)}`;
  document.getElementById("stat-beds").textContent = fmt(s.median_bedrooms, 1);
  document.getElementById("stat-land").textContent = s.median_land_sqm === null ? "–" : `${fmt(s.median_land_sqm)} m²`;
  document.getElementById("stat-garage").textContent = fmt(s.median_garage_spaces, 1);
  renderBins(s.price_bins);
  renderListings(body.listings);
});
"#;

pub fn dashboard_page() -> Markup {
    desktop_layout(
        "Suburb Explorer",
        html! {
            main {
                h1 { "Suburb Explorer" }

                form id="search" class="card" style="display: flex; gap: 10px; align-items: center;" {
                    label for="suburb" { "Suburb" }
                    input type="text" id="suburb" name="suburb" placeholder="Richmond" required;

                    label for="property_type" { "Type" }
                    select id="property_type" name="property_type" {
                        @for (value, name) in PROPERTY_TYPES {
                            option value=(value) { (name) }
                        }
                    }

                    button type="submit" { "Search" }
                }
                (error_panel("search-error"))

                section class="stats" {
                    (stat_tile("Listings", "stat-count"))
                    (stat_tile("Median price", "stat-price"))
                    (stat_tile("Median bedrooms", "stat-beds"))
                    (stat_tile("Median land", "stat-land"))
                    (stat_tile("Median car spaces", "stat-garage"))
                }

                (card("Price distribution", html! { div id="price-bins" {} }))

                h2 { "Listings" }
                div id="listings" class="listings" {}
            }
            script { (PreEscaped(SCRIPT)) }
        },
    )
}
