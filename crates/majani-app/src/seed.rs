// Rust guideline compliant 2026-10-12

//! Demo catalog around central Tehran.

use chrono::{DateTime, Duration, Utc};
use majani_core::{Category, Condition, Listing, ListingDraft, Location, Status};

struct SeedItem {
    owner_id: &'static str,
    title: &'static str,
    description: &'static str,
    images: &'static [&'static str],
    category: Category,
    condition: Condition,
    lat: f64,
    lon: f64,
    address: &'static str,
    hours_ago: i64,
    status: Status,
    views: u64,
}

const SEED: [SeedItem; 5] = [
    SeedItem {
        owner_id: "usr-2b7e15",
        title: "صندلی چوبی قدیمی",
        description: "یک صندلی چوبی محکم که نیاز به کمی سنباده‌کاری دارد. عالی برای پروژه‌های بازسازی!",
        images: &[
            "https://images.unsplash.com/photo-1503602642458-23211144584b?auto=format&fit=crop&w=600&q=80",
            "https://images.unsplash.com/photo-1519947486511-46149fa0a254?auto=format&fit=crop&w=600&q=80",
        ],
        category: Category::Home,
        condition: Condition::Used,
        lat: 35.6892,
        lon: 51.3890,
        address: "میدان انقلاب",
        hours_ago: 2,
        status: Status::Available,
        views: 124,
    },
    SeedItem {
        owner_id: "usr-3c9f40",
        title: "کتاب حساب دیفرانسیل",
        description: "کتاب ریاضیات دانشگاهی، ترم پیش استفاده شده. بدون خط خوردگی و کاملاً تمیز.",
        images: &[
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?auto=format&fit=crop&w=600&q=80",
        ],
        category: Category::Books,
        condition: Condition::AlmostNew,
        lat: 35.7219,
        lon: 51.3347,
        address: "صادقیه",
        hours_ago: 5,
        status: Status::Available,
        views: 45,
    },
    SeedItem {
        owner_id: "usr-4d1a88",
        title: "دوچرخه بچه گانه (قرمز)",
        description: "لاستیک‌ها سالم، بدنه بدون زنگ‌زدگی. پسرم بزرگ شده و دیگه استفاده نمی‌کنه.",
        images: &[
            "https://images.unsplash.com/photo-1532298229144-0ec0c57e36cf?auto=format&fit=crop&w=600&q=80",
        ],
        category: Category::Kids,
        condition: Condition::Used,
        lat: 35.7448,
        lon: 51.3753,
        address: "ونک",
        hours_ago: 25,
        status: Status::Reserved,
        views: 210,
    },
    SeedItem {
        owner_id: "usr-5e6b02",
        title: "مبل راحتی سه نفره",
        description: "مبل طوسی بزرگ. خیلی راحت هست. لطفاً اگر وانت دارید پیام بدید.",
        images: &[
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&w=600&q=80",
        ],
        category: Category::Home,
        condition: Condition::Used,
        lat: 35.6997,
        lon: 51.3380,
        address: "ستارخان",
        hours_ago: 48,
        status: Status::Available,
        views: 89,
    },
    SeedItem {
        owner_id: "usr-6f0c7d",
        title: "لپ‌تاپ قدیمی لنوو",
        description: "روشن میشه ولی باتریش خرابه. برای قطعات یا استفاده با شارژر مناسبه.",
        images: &[
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?auto=format&fit=crop&w=600&q=80",
        ],
        category: Category::Electronics,
        condition: Condition::NeedsRepair,
        lat: 35.7000,
        lon: 51.4000,
        address: "هفت تیر",
        hours_ago: 120,
        status: Status::Available,
        views: 150,
    },
];

/// Builds the demo listings, newest first, dated relative to `now`.
#[must_use]
pub fn demo_listings(now: DateTime<Utc>) -> Vec<Listing> {
    SEED.iter()
        .map(|item| {
            let draft = ListingDraft {
                owner_id: item.owner_id.to_string(),
                title: item.title.to_string(),
                description: item.description.to_string(),
                images: item.images.iter().map(|s| s.to_string()).collect(),
                category: item.category,
                condition: item.condition,
                location: Location::new(item.lat, item.lon).with_address(item.address),
                city: "تهران".to_string(),
            };
            let mut listing = Listing::from_draft(draft, now - Duration::hours(item.hours_ago));
            listing.status = item.status;
            listing.views = item.views;
            listing
        })
        .collect()
}
