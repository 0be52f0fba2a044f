//! Rule-based part-of-speech tagging
//!
//! Assigns Penn Treebank tags without a trained model, in two passes:
//!
//! 1. **Draft**: closed-class and common-word lexicon lookup, then shape and
//!    suffix rules for unknown words (digits, `-ly`, `-ing`, `-ed`, adjective
//!    suffixes, plural `-s`, capitalisation).
//! 2. **Resolve**: left-to-right contextual rules that settle ambiguous drafts
//!    using the tags already assigned and a one-token lookahead.

use rustc_hash::FxHashMap;

use crate::types::{PosTag, TaggedToken};

/// Lexicon entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// Unambiguous tag (context rules may still refine a few function words)
    Tag(PosTag),
    /// Base verb form: VB, VBP or NN depending on context
    Base,
    /// Irregular form shared by past tense and past participle
    Past,
}

/// First-pass tag guess for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Draft {
    Known(PosTag),
    Base,
    Past,
    RegularPast,
    Gerund,
    Plural,
    Unknown,
}

impl Draft {
    /// Best single guess, used for lookahead
    fn provisional(self) -> PosTag {
        match self {
            Draft::Known(tag) => tag,
            Draft::Base => PosTag::VB,
            Draft::Past | Draft::RegularPast => PosTag::VBD,
            Draft::Gerund => PosTag::VBG,
            Draft::Plural => PosTag::NNS,
            Draft::Unknown => PosTag::NN,
        }
    }
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "these", "those", "every", "each", "some", "any", "no", "another",
    "either", "neither", "all", "both", "half",
];

const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "'em",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out", "off",
    "over", "under", "since", "until", "till", "than", "because", "if", "while", "as", "among",
    "upon", "within", "without", "across", "behind", "beyond", "toward", "towards", "near", "per",
    "via", "although", "though", "whether", "unless", "onto", "throughout", "despite", "except",
    "around", "along", "beside", "besides", "beneath", "inside", "outside", "underneath",
    "unlike", "amid", "whereas", "like", "that",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "plus", "&"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought", "'ll",
    "’ll", "'d", "’d", "wo", "ca",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "n’t", "very", "also", "too", "often", "always", "never", "just", "now", "then",
    "here", "there", "quite", "rather", "almost", "already", "soon", "still", "even", "ever",
    "again", "away", "only", "well", "perhaps", "maybe", "once", "together", "however", "really",
    "usually", "sometimes", "else", "indeed", "instead", "anyway", "ago", "later", "yet", "so",
    "twice", "thus", "therefore", "hence", "meanwhile", "otherwise", "somewhat", "seldom",
    "everywhere", "anywhere", "somewhere", "nowhere", "afterwards", "abroad", "ahead", "apart",
    "aside", "forward", "further", "back",
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "big",
    "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "quick", "brown", "lazy", "happy", "sad", "red", "blue",
    "green", "black", "white", "yellow", "gray", "grey", "pink", "purple", "hot", "cold", "easy",
    "hard", "free", "full", "simple", "strong", "true", "whole", "real", "sure", "clear", "dark",
    "many", "much", "several", "such", "fast", "slow", "low", "short", "tall", "nice", "fine",
    "late", "open", "close", "poor", "rich", "right", "wrong", "friendly", "lovely", "likely",
    "daily", "ugly", "holy", "main", "major", "certain", "possible", "social", "political",
    "national", "local", "general", "special", "human", "natural", "personal", "final", "recent",
    "similar", "various", "common", "current", "wide", "deep", "huge", "tiny", "bright", "cheap",
    "clean", "cool", "dry", "wet", "warm", "kind", "safe", "soft", "loud", "quiet", "smart",
    "sweet", "thin", "thick", "weak", "wild", "heavy", "pretty", "busy", "empty", "funny",
    "angry", "hungry", "sorry", "ready", "dirty", "crazy", "wise", "brave", "calm", "proud",
    "fair", "flat", "fresh", "gentle", "glad", "grand", "mad", "neat", "pale", "rare", "raw",
    "rough", "round", "sharp", "shy", "sick", "silly", "solid", "strange", "tough", "vast",
    "honest", "modern", "beautiful", "difficult", "available", "economic", "serious", "entire",
];

const NOUNS: &[&str] = &[
    "thing", "something", "nothing", "anything", "everything", "someone", "anyone", "everyone",
    "morning", "evening", "king", "ring", "spring", "string", "wing", "ceiling", "wedding",
    "pudding", "bed", "seed", "speed", "shed", "weed", "family", "table", "cable", "fish", "dish",
    "today", "tomorrow", "yesterday", "tonight", "time", "way", "day", "year", "news", "series",
    "species", "gas", "lens", "interest", "forest", "request", "harvest", "contest", "protest",
    "olive", "music",
];

const PLURAL_NOUNS: &[&str] = &[
    "people", "men", "women", "children", "feet", "teeth", "mice", "geese", "police",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "hello", "hi", "hey", "wow", "yes", "yeah", "ok", "okay", "oops", "alas", "ouch",
    "hmm", "bye",
];

const WH_WORDS: &[(&str, PosTag)] = &[
    ("who", PosTag::WP),
    ("whom", PosTag::WP),
    ("what", PosTag::WP),
    ("whoever", PosTag::WP),
    ("whose", PosTag::WPS),
    ("which", PosTag::WDT),
    ("whatever", PosTag::WDT),
    ("whichever", PosTag::WDT),
    ("when", PosTag::WRB),
    ("where", PosTag::WRB),
    ("why", PosTag::WRB),
    ("how", PosTag::WRB),
    ("whenever", PosTag::WRB),
    ("wherever", PosTag::WRB),
];

const VERB_FORMS: &[(&str, PosTag)] = &[
    ("am", PosTag::VBP),
    ("are", PosTag::VBP),
    ("'m", PosTag::VBP),
    ("’m", PosTag::VBP),
    ("'re", PosTag::VBP),
    ("’re", PosTag::VBP),
    ("'ve", PosTag::VBP),
    ("’ve", PosTag::VBP),
    ("is", PosTag::VBZ),
    ("has", PosTag::VBZ),
    ("does", PosTag::VBZ),
    ("goes", PosTag::VBZ),
    ("says", PosTag::VBZ),
    ("be", PosTag::VB),
    ("being", PosTag::VBG),
    ("having", PosTag::VBG),
    ("doing", PosTag::VBG),
    ("going", PosTag::VBG),
];

/// Irregular past tense forms that are never participles
const PAST_TENSE: &[&str] = &[
    "was", "were", "did", "went", "took", "saw", "came", "knew", "gave", "became", "began",
    "wrote", "ran", "spoke", "grew", "fell", "drew", "broke", "rose", "drove", "wore", "chose",
    "ate", "flew", "threw", "forgot", "sang", "swam", "rode", "hid", "bit", "shook", "stole",
    "woke", "froze", "tore", "blew",
];

/// Irregular past participles that are never past tense
const PAST_PARTICIPLES: &[&str] = &[
    "been", "done", "gone", "taken", "seen", "known", "given", "begun", "written", "spoken",
    "grown", "fallen", "drawn", "broken", "risen", "driven", "worn", "chosen", "eaten", "flown",
    "thrown", "forgotten", "sung", "swum", "gotten", "ridden", "hidden", "bitten", "shaken",
    "stolen", "woken", "frozen", "torn", "blown",
];

/// Irregular forms shared by past tense and participle
const PAST_FORMS: &[&str] = &[
    "had", "made", "found", "told", "left", "felt", "brought", "kept", "held", "stood", "heard",
    "meant", "met", "paid", "sat", "led", "lost", "sent", "built", "understood", "spent",
    "bought", "caught", "taught", "sold", "fought", "thought", "said", "got", "won", "slept",
    "fed", "shot", "hung", "dug", "lit",
];

const BASE_VERBS: &[&str] = &[
    "be", "have", "do", "go", "get", "make", "take", "see", "come", "know", "think", "say",
    "give", "find", "tell", "become", "leave", "feel", "bring", "begin", "keep", "hold", "write",
    "stand", "hear", "let", "mean", "meet", "run", "pay", "sit", "speak", "lead", "read", "grow",
    "lose", "fall", "send", "build", "understand", "draw", "break", "spend", "cut", "rise",
    "drive", "buy", "wear", "choose", "eat", "sleep", "fly", "catch", "teach", "sell", "fight",
    "throw", "forget", "sing", "swim", "want", "need", "seem", "help", "try", "ask", "use",
    "work", "play", "move", "live", "believe", "happen", "love", "put", "set", "hit", "cost",
    "hurt", "shut", "arrive", "receive", "achieve", "survive", "forgive", "wish", "finish",
    "publish", "establish", "punish", "feed", "proceed", "succeed", "exceed", "bleed", "look",
    "call", "turn", "start", "follow", "allow", "provide", "include", "continue", "learn",
    "change", "consider", "appear", "serve", "expect", "remember", "hope", "wait", "walk",
    "talk", "hide", "ride", "bite", "shake", "steal", "wake", "freeze", "tear", "blow", "dig",
    "hang", "shoot", "win",
];

/// Auxiliaries after which a past form is a participle
const AUXILIARIES: &[&str] = &[
    "have", "has", "had", "having", "'ve", "’ve", "is", "are", "was", "were", "be", "been",
    "being", "am", "'m", "’m", "'re", "’re", "get", "gets", "got", "getting", "gotten",
];

const DO_FORMS: &[&str] = &["do", "does", "did"];

const BE_FORMS: &[&str] = &["is", "are", "was", "were", "be", "been", "'s", "’s", "am"];

/// Subject pronouns taking non-3rd-person verb agreement
const PLURAL_SUBJECTS: &[&str] = &["i", "you", "we", "they"];

const SINGULAR_SUBJECTS: &[&str] = &["he", "she", "it"];

const PARTICLES: &[&str] = &["up", "down", "out", "off", "over"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

/// Rule-based Penn Treebank tagger
#[derive(Debug, Clone)]
pub struct PosTagger {
    lexicon: FxHashMap<&'static str, Entry>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    /// Build the tagger and its lexicon
    pub fn new() -> Self {
        let mut lexicon = FxHashMap::default();

        // Later groups override earlier ones for words listed twice
        insert_all(&mut lexicon, NOUNS, Entry::Tag(PosTag::NN));
        insert_all(&mut lexicon, PLURAL_NOUNS, Entry::Tag(PosTag::NNS));
        insert_all(&mut lexicon, ADJECTIVES, Entry::Tag(PosTag::JJ));
        insert_all(&mut lexicon, BASE_VERBS, Entry::Base);
        insert_all(&mut lexicon, PAST_FORMS, Entry::Past);
        insert_all(&mut lexicon, PAST_TENSE, Entry::Tag(PosTag::VBD));
        insert_all(&mut lexicon, PAST_PARTICIPLES, Entry::Tag(PosTag::VBN));
        for &(word, tag) in VERB_FORMS.iter().chain(WH_WORDS) {
            lexicon.insert(word, Entry::Tag(tag));
        }
        insert_all(&mut lexicon, ADVERBS, Entry::Tag(PosTag::RB));
        insert_all(&mut lexicon, NUMBER_WORDS, Entry::Tag(PosTag::CD));
        insert_all(&mut lexicon, INTERJECTIONS, Entry::Tag(PosTag::UH));
        insert_all(&mut lexicon, PREPOSITIONS, Entry::Tag(PosTag::IN));
        insert_all(&mut lexicon, CONJUNCTIONS, Entry::Tag(PosTag::CC));
        insert_all(&mut lexicon, MODALS, Entry::Tag(PosTag::MD));
        insert_all(&mut lexicon, POSSESSIVE_PRONOUNS, Entry::Tag(PosTag::PRPS));
        insert_all(&mut lexicon, PERSONAL_PRONOUNS, Entry::Tag(PosTag::PRP));
        insert_all(&mut lexicon, DETERMINERS, Entry::Tag(PosTag::DT));
        lexicon.insert("to", Entry::Tag(PosTag::TO));
        lexicon.insert("better", Entry::Tag(PosTag::JJR));
        lexicon.insert("worse", Entry::Tag(PosTag::JJR));
        lexicon.insert("more", Entry::Tag(PosTag::JJR));
        lexicon.insert("less", Entry::Tag(PosTag::JJR));
        lexicon.insert("best", Entry::Tag(PosTag::JJS));
        lexicon.insert("worst", Entry::Tag(PosTag::JJS));
        lexicon.insert("most", Entry::Tag(PosTag::JJS));
        lexicon.insert("least", Entry::Tag(PosTag::JJS));
        lexicon.insert("'s", Entry::Tag(PosTag::POS));
        lexicon.insert("’s", Entry::Tag(PosTag::POS));

        Self { lexicon }
    }

    /// Tag a sequence of word tokens
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TaggedToken> {
        let words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

        let drafts: Vec<Draft> = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let sentence_initial =
                    i == 0 || matches!(words[i - 1], "." | "!" | "?" | "``" | "\"");
                self.draft(word, &lower[i], sentence_initial)
            })
            .collect();

        let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let tag = resolve(&lower, &drafts, &tags, i);
            tags.push(tag);
        }

        words
            .into_iter()
            .zip(tags)
            .map(|(word, pos)| TaggedToken::new(word, pos))
            .collect()
    }

    /// First-pass guess from the lexicon, word shape and suffix
    fn draft(&self, word: &str, lower: &str, sentence_initial: bool) -> Draft {
        if !word.chars().any(char::is_alphanumeric) {
            return Draft::Known(punctuation_tag(word));
        }

        match self.lexicon.get(lower) {
            Some(Entry::Tag(tag)) => return Draft::Known(*tag),
            Some(Entry::Base) => return Draft::Base,
            Some(Entry::Past) => return Draft::Past,
            None => {}
        }

        if is_number(lower) {
            return Draft::Known(PosTag::CD);
        }

        if !sentence_initial && word.chars().next().is_some_and(char::is_uppercase) {
            return Draft::Known(if lower.ends_with('s') && lower.len() > 3 {
                PosTag::NNPS
            } else {
                PosTag::NNP
            });
        }

        let len = lower.chars().count();
        if lower.contains('-') {
            return Draft::Known(PosTag::JJ);
        }
        if len >= 4 && lower.ends_with("ly") {
            return Draft::Known(PosTag::RB);
        }
        if len >= 5 && lower.ends_with("ing") {
            return Draft::Gerund;
        }
        if len >= 4 && lower.ends_with("ed") {
            return Draft::RegularPast;
        }
        if len >= 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Draft::Known(PosTag::JJ);
        }
        if self.is_graded_adjective(lower, "est") {
            return Draft::Known(PosTag::JJS);
        }
        if self.is_graded_adjective(lower, "er") {
            return Draft::Known(PosTag::JJR);
        }
        if len >= 3
            && lower.ends_with('s')
            && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
        {
            return Draft::Plural;
        }

        Draft::Unknown
    }

    /// Whether `word` is a known adjective inflected with `suffix`
    /// (`bigger`, `largest`, `happiest`)
    fn is_graded_adjective(&self, word: &str, suffix: &str) -> bool {
        let Some(stem) = word.strip_suffix(suffix) else {
            return false;
        };
        if stem.len() < 2 {
            return false;
        }

        let is_adjective = |w: &str| self.lexicon.get(w) == Some(&Entry::Tag(PosTag::JJ));
        let bytes = stem.as_bytes();
        let doubled = stem.is_ascii() && bytes[bytes.len() - 1] == bytes[bytes.len() - 2];

        is_adjective(stem)
            || is_adjective(format!("{stem}e").as_str())
            || (doubled && is_adjective(&stem[..stem.len() - 1]))
            || stem
                .strip_suffix('i')
                .is_some_and(|s| is_adjective(format!("{s}y").as_str()))
    }
}

fn insert_all(lexicon: &mut FxHashMap<&'static str, Entry>, words: &[&'static str], entry: Entry) {
    for &word in words {
        lexicon.insert(word, entry);
    }
}

/// Tag for a token with no alphanumeric characters
fn punctuation_tag(token: &str) -> PosTag {
    match token {
        "." | "!" | "?" | "?!" | "!!" | "??" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "-" | "--" | "..." | "…" => PosTag::Colon,
        "(" | "[" | "{" => PosTag::LeftParen,
        ")" | "]" | "}" => PosTag::RightParen,
        "``" | "“" | "‘" => PosTag::OpenQuote,
        "''" | "'" | "”" | "’" | "\"" => PosTag::CloseQuote,
        "$" | "€" | "£" => PosTag::Dollar,
        "#" => PosTag::Hash,
        _ => PosTag::SYM,
    }
}

fn is_number(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/' | ':' | '%'))
}

/// Index of the closest earlier token that is not an adverb
fn previous_core(tags: &[PosTag], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tags[j].is_adverb())
}

fn is_nominal(tag: PosTag) -> bool {
    tag.is_noun() || matches!(tag, PosTag::CD | PosTag::PRP)
}

/// Settle the final tag for token `i` given the tags already assigned
fn resolve(words: &[String], drafts: &[Draft], tags: &[PosTag], i: usize) -> PosTag {
    let word = words[i].as_str();
    let prev = i.checked_sub(1).map(|j| tags[j]);
    let core = previous_core(tags, i);
    let core_tag = core.map(|j| tags[j]);
    let core_word = core.map(|j| words[j].as_str());
    let next = drafts.get(i + 1).map(|d| d.provisional());
    let next_word = words.get(i + 1).map(String::as_str);

    let after_infinitive_marker = matches!(core_tag, Some(PosTag::TO) | Some(PosTag::MD))
        || core_word.is_some_and(|w| DO_FORMS.contains(&w));
    let after_plural_subject = match (core_tag, core_word) {
        (Some(PosTag::PRP), Some(w)) => PLURAL_SUBJECTS.contains(&w),
        (Some(PosTag::NNS), _) | (Some(PosTag::NNPS), _) => true,
        _ => false,
    };
    let after_singular_subject = match (core_tag, core_word) {
        (Some(PosTag::PRP), Some(w)) => SINGULAR_SUBJECTS.contains(&w),
        (Some(tag), _) => matches!(tag, PosTag::NN | PosTag::NNP | PosTag::WDT | PosTag::WP),
        _ => false,
    };
    let after_auxiliary = core_word.is_some_and(|w| AUXILIARIES.contains(&w));
    let after_modifier = matches!(
        prev,
        Some(PosTag::DT) | Some(PosTag::PRPS) | Some(PosTag::JJ) | Some(PosTag::POS)
    );

    match drafts[i] {
        Draft::Known(tag) => refine_known(word, tag, prev, next, next_word, core_word),
        Draft::Base => {
            if after_infinitive_marker {
                PosTag::VB
            } else if after_modifier || prev == Some(PosTag::IN) {
                PosTag::NN
            } else if after_plural_subject || after_singular_subject {
                PosTag::VBP
            } else {
                PosTag::VB
            }
        }
        Draft::Past => {
            if after_auxiliary {
                PosTag::VBN
            } else {
                PosTag::VBD
            }
        }
        Draft::RegularPast => {
            if matches!(prev, Some(PosTag::DT) | Some(PosTag::PRPS)) {
                PosTag::JJ
            } else if after_auxiliary {
                PosTag::VBN
            } else {
                PosTag::VBD
            }
        }
        Draft::Gerund => {
            if after_modifier {
                PosTag::NN
            } else {
                PosTag::VBG
            }
        }
        Draft::Plural => {
            if after_singular_subject && !after_modifier {
                PosTag::VBZ
            } else {
                PosTag::NNS
            }
        }
        Draft::Unknown => {
            if after_infinitive_marker {
                PosTag::VB
            } else if after_plural_subject && !after_modifier {
                PosTag::VBP
            } else {
                PosTag::NN
            }
        }
    }
}

/// Context rules for ambiguous function words
fn refine_known(
    word: &str,
    tag: PosTag,
    prev: Option<PosTag>,
    next: Option<PosTag>,
    next_word: Option<&str>,
    core_word: Option<&str>,
) -> PosTag {
    let next_is_modifiable =
        next.is_some_and(|t| t.is_noun() || t.is_adjective() || t == PosTag::CD);
    let next_is_graded = next.is_some_and(|t| t.is_adjective() || t.is_adverb());

    match word {
        "that" => {
            if prev.is_some_and(|t| t.is_noun()) {
                PosTag::WDT
            } else if next_is_modifiable {
                PosTag::DT
            } else {
                PosTag::IN
            }
        }
        "her" if next_is_modifiable => PosTag::PRPS,
        "there" if next_word.is_some_and(|w| BE_FORMS.contains(&w)) => PosTag::EX,
        "more" | "less" if next_is_graded => PosTag::RBR,
        "most" | "least" if next_is_graded => PosTag::RBS,
        "all" | "both" | "half" if matches!(next, Some(PosTag::DT) | Some(PosTag::PRPS)) => {
            PosTag::PDT
        }
        "'s" | "’s" => {
            if core_word == Some("let") {
                PosTag::PRP
            } else if matches!(
                prev,
                Some(PosTag::PRP) | Some(PosTag::EX) | Some(PosTag::WP) | Some(PosTag::WDT)
            ) || matches!(core_word, Some("that") | Some("there") | Some("here"))
                || next.is_some_and(|t| {
                    matches!(
                        t,
                        PosTag::VBG | PosTag::VBN | PosTag::DT | PosTag::RB | PosTag::JJ
                    )
                })
            {
                PosTag::VBZ
            } else {
                PosTag::POS
            }
        }
        "like" => match prev {
            Some(PosTag::TO) | Some(PosTag::MD) => PosTag::VB,
            Some(PosTag::PRP) | Some(PosTag::NNS) => PosTag::VBP,
            _ => tag,
        },
        w if PARTICLES.contains(&w)
            && prev.is_some_and(|t| t.is_verb())
            && !next.is_some_and(|t| {
                is_nominal(t) || matches!(t, PosTag::DT | PosTag::PRPS | PosTag::JJ)
            }) =>
        {
            PosTag::RP
        }
        _ => tag,
    }
}
