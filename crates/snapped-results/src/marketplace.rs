use snapped_config::ResultFilter;
use snapped_types::SearchResult;

/// Resale marketplaces. A result linking to one of these is pre-owned.
pub const PRE_OWNED_SITES: &[&str] = &[
    "https://www.therealreal.com",
    "https://www.vestiairecollective.com",
    "https://www.rebag.com",
    "https://www.fashionphile.com",
    "https://www.grailed.com",
    "https://www.goat.com",
    "https://www.stockx.com",
    "https://www.depop.com",
    "https://poshmark.com",
    "https://www.thredup.com",
    "https://www.chairish.com",
    "https://www.1stdibs.com",
    "https://www.aptdeco.com",
    "https://www.kaiyo.com",
    "https://www.ebay.com",
    "https://www.facebook.com/marketplace",
    "https://www.mercari.com",
    "https://offerup.com",
    "https://www.craigslist.org",
    "https://www.vinted.com",
    "https://www.olx.com",
    "https://www.marktplaats.nl",
    "https://www.trademe.co.nz",
    "https://carousell.com",
    "https://www.yoopies.com",
    "https://www.rakuma.rakuten.co.jp",
    "https://fril.jp",
    "https://www.mercari.jp",
];

pub fn is_pre_owned_link(link: Option<&str>) -> bool {
    link.is_some_and(|link| PRE_OWNED_SITES.iter().any(|site| link.contains(site)))
}

pub fn matches_filter(result: &SearchResult, filter: ResultFilter) -> bool {
    match filter {
        ResultFilter::All => true,
        ResultFilter::New => !is_pre_owned_link(result.link.as_deref()),
        ResultFilter::PreOwned => is_pre_owned_link(result.link.as_deref()),
    }
}
