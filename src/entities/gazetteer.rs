//! Word lists backing the pattern extractor. All entries are lowercase.

pub const LOCATIONS: &[&str] = &[
    // Continents and regions
    "africa", "antarctica", "asia", "europe", "north america", "south america", "oceania",
    "middle east", "latin america", "scandinavia", "balkans", "caribbean",
    // Countries
    "afghanistan", "argentina", "australia", "austria", "bangladesh", "belgium", "bolivia",
    "brazil", "bulgaria", "cambodia", "canada", "chile", "china", "colombia", "croatia", "cuba",
    "czech republic", "denmark", "ecuador", "egypt", "ethiopia", "finland", "france",
    "germany", "ghana", "greece", "hungary", "iceland", "india", "indonesia", "iran", "iraq",
    "ireland", "israel", "italy", "jamaica", "japan", "jordan", "kenya", "kuwait", "lebanon",
    "malaysia", "mexico", "morocco", "myanmar", "nepal", "netherlands", "new zealand",
    "nigeria", "north korea", "norway", "pakistan", "palestine", "peru", "philippines",
    "poland", "portugal", "qatar", "romania", "russia", "saudi arabia", "serbia", "singapore",
    "somalia", "south africa", "south korea", "spain", "sri lanka", "sudan", "sweden",
    "switzerland", "syria", "taiwan", "tanzania", "thailand", "turkey", "uganda", "ukraine",
    "united arab emirates", "united kingdom", "united states", "united states of america",
    "uruguay", "venezuela", "vietnam", "yemen", "zimbabwe", "us", "usa", "uk", "uae", "britain",
    "great britain", "england", "scotland", "wales",
    // Cities
    "amsterdam", "athens", "bangkok", "beijing", "berlin", "brussels", "cairo", "chicago",
    "delhi", "new delhi", "dubai", "geneva", "hong kong", "istanbul", "jakarta", "karachi",
    "kyiv", "lagos", "lisbon", "london", "los angeles", "madrid", "manila", "melbourne",
    "mexico city", "moscow", "mumbai", "nairobi", "new york", "new york city", "paris",
    "rome", "san francisco", "seoul", "shanghai", "sydney", "tehran", "tokyo", "toronto",
    "vienna", "warsaw", "washington", "washington dc", "kolkata", "chennai", "bangalore",
];

/// Words that make a capitalized span an institution.
pub const ORGANIZATION_HEADS: &[&str] = &[
    "agency", "association", "assembly", "authority", "bank", "bureau", "commission",
    "committee", "company", "congress", "corporation", "council", "court", "department",
    "foundation", "government", "inc", "institute", "laboratory", "ltd", "ministry", "nations",
    "organisation", "organization", "parliament", "party", "police", "senate", "service",
    "society", "union", "university", "tribunal", "board", "office", "forum", "federation",
];

/// Honorifics and office titles that introduce a person's name.
pub const PERSON_TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "dame", "lord", "lady",
    "president", "minister", "prime", "chancellor", "senator", "sen", "governor", "gov",
    "judge", "justice", "king", "queen", "prince", "princess", "pope", "general", "gen",
    "mayor", "chief", "secretary", "ceo", "rep", "representative", "ambassador",
];

/// Abbreviations whose trailing period does not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "gen", "sen", "rep", "gov", "lt", "col",
    "sgt", "capt", "inc", "ltd", "co", "corp", "vs", "no",
];

pub const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

pub fn is_location(phrase: &str) -> bool {
    LOCATIONS.contains(&phrase.to_lowercase().as_str())
}

pub fn is_organization_head(word: &str) -> bool {
    ORGANIZATION_HEADS.contains(&word.to_lowercase().as_str())
}

pub fn is_person_title(word: &str) -> bool {
    PERSON_TITLES.contains(&word.to_lowercase().as_str())
}

pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word.to_lowercase().as_str())
}
