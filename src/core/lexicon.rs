use crate::domain::model::{Noun, Scale};

pub const ONES: [&str; 10] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];

/// 10 到 19 各有獨立寫法，不由個位數組合
pub const TEENS: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

pub const TENS: [&str; 10] = [
    "", "عشرة", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

pub const HUNDREDS: [&str; 10] = [
    "",
    "مائة",
    "مائتان",
    "ثلاثمائة",
    "أربعمائة",
    "خمسمائة",
    "ستمائة",
    "سبعمائة",
    "ثمانمائة",
    "تسعمائة",
];

pub const CONJUNCTION: &str = "و";
pub const OPENING: &str = "فقط";
pub const CLOSING: &str = "لا غير";

/// 金額為零時的固定句子
pub const ZERO_PHRASE: &str = "فقط لا غير";

pub const THOUSAND: Noun = Noun {
    singular: "ألف",
    dual: "ألفان",
    plural: "آلاف",
    accusative: "ألف",
    genitive: "ألف",
};

pub const MILLION: Noun = Noun {
    singular: "مليون",
    dual: "مليونان",
    plural: "ملايين",
    accusative: "مليون",
    genitive: "مليون",
};

pub const BILLION: Noun = Noun {
    singular: "مليار",
    dual: "ملياران",
    plural: "مليارات",
    accusative: "مليار",
    genitive: "مليار",
};

/// 埃及鎊；數量為一時數詞置於名詞之後
pub const EGYPTIAN_POUND: Noun = Noun {
    singular: "جنيه مصري واحد",
    dual: "جنيهان مصريان",
    plural: "جنيهات مصرية",
    accusative: "جنيهًا مصريًا",
    genitive: "جنيه مصري",
};

/// 個位分組沒有量級名詞
pub fn scale_noun(scale: Scale) -> Option<&'static Noun> {
    match scale {
        Scale::Unit => None,
        Scale::Thousand => Some(&THOUSAND),
        Scale::Million => Some(&MILLION),
        Scale::Billion => Some(&BILLION),
    }
}
