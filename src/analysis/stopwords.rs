//! Stopword lists and their per-language cache.
//!
//! Lists come from two places: the lists compiled into the crate, and an
//! optional directory laid out like the NLTK stopwords corpus (one file per
//! language, named after it, one word per line). A configured directory is
//! consulted before the built-in lists.
//!
//! A language that neither source knows is a configuration error. There is
//! no fallback to another language.
//!
//! # Examples
//!
//! ```
//! use wordfreq::analysis::stopwords::StopwordCache;
//!
//! let cache = StopwordCache::builtin();
//! let english = cache.get("English").unwrap();
//! assert!(english.contains("the"));
//!
//! assert!(cache.get("klingon").is_err());
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};
use log::debug;
use parking_lot::RwLock;

use crate::error::{Result, WordFreqError};

/// A resolved, immutable stopword set.
pub type StopwordSet = Arc<AHashSet<String>>;

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

const FRENCH: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "meme", "mes", "moi",
    "mon", "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "c", "d", "j", "l", "m", "n", "s", "t", "y", "est", "sont", "etait",
    "avait", "ont", "sera", "cette", "cet", "comme", "plus", "tout", "tous", "aussi",
];

const GERMAN: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "als", "also", "am", "an", "ander", "andere",
    "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann", "das", "dass",
    "dein", "dem", "den", "der", "des", "dich", "die", "dir", "doch", "dort", "du", "durch",
    "ein", "eine", "einem", "einen", "einer", "eines", "er", "es", "euch", "euer", "hab",
    "habe", "haben", "hat", "hatte", "ich", "ihm", "ihn", "ihr", "ihre", "im", "in", "ist",
    "jede", "jener", "kann", "kein", "keine", "man", "mein", "meine", "mich", "mir", "mit",
    "muss", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr",
    "sein", "seine", "sich", "sie", "sind", "so", "solche", "um", "und", "uns", "unser",
    "unter", "viel", "vom", "von", "vor", "war", "waren", "was", "weil", "welche", "wenn",
    "werde", "werden", "wie", "wieder", "will", "wir", "wird", "wo", "zu", "zum", "zur",
    "zwar", "zwischen",
];

const SPANISH: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "mas", "pero", "sus", "le", "ya", "o",
    "este", "entre", "cuando", "muy", "sin", "sobre", "tambien", "me", "hasta", "hay",
    "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni",
    "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mi", "antes", "algunos",
    "unos", "yo", "otro", "otras", "otra", "tanto", "esa", "estos", "mucho", "quienes",
    "nada", "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo", "nosotros",
    "es", "son", "fue", "era", "ha", "han", "ser", "tiene", "tienen",
];

const ITALIAN: &[&str] = &[
    "ad", "al", "allo", "ai", "agli", "alla", "alle", "con", "col", "da", "dal", "dallo",
    "dai", "dagli", "dalla", "dalle", "di", "del", "dello", "dei", "degli", "della", "delle",
    "in", "nel", "nello", "nei", "negli", "nella", "nelle", "su", "sul", "sullo", "sui",
    "sugli", "sulla", "sulle", "per", "tra", "contro", "io", "tu", "lui", "lei", "noi", "voi",
    "loro", "mio", "mia", "miei", "mie", "tuo", "tua", "suo", "sua", "nostro", "nostra",
    "vostro", "vostra", "mi", "ti", "ci", "vi", "lo", "la", "li", "le", "gli", "ne", "il",
    "un", "uno", "una", "ma", "ed", "se", "perche", "anche", "come", "dov", "dove", "che",
    "chi", "cui", "non", "piu", "quale", "quanto", "quello", "questo", "si", "e", "sono",
    "era", "ha", "hanno", "essere", "avere",
];

const PORTUGUESE: &[&str] = &[
    "de", "a", "o", "que", "e", "do", "da", "em", "um", "para", "com", "nao", "uma", "os",
    "no", "se", "na", "por", "mais", "as", "dos", "como", "mas", "ao", "ele", "das", "seu",
    "sua", "ou", "quando", "muito", "nos", "ja", "eu", "tambem", "so", "pelo", "pela", "ate",
    "isso", "ela", "entre", "depois", "sem", "mesmo", "aos", "seus", "quem", "nas", "me",
    "esse", "eles", "voce", "essa", "num", "nem", "suas", "meu", "minha", "numa", "pelos",
    "elas", "qual", "lhe", "deles", "essas", "esses", "pelas", "este", "dele", "tu", "te",
    "vos", "lhes", "meus", "minhas", "teu", "tua", "nosso", "nossa", "esta", "estes", "estas",
    "aquele", "aquela", "isto", "aquilo", "foi", "ser", "tem", "sao",
];

const DUTCH: &[&str] = &[
    "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn",
    "is", "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan",
    "zou", "of", "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij",
    "ook", "tot", "je", "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft",
    "hebben", "deze", "u", "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat",
    "iets", "worden", "toch", "al", "waren", "veel", "meer", "doen", "toen", "moet", "ben",
    "zonder", "kan", "hun", "dus", "alles", "onder", "ja", "eens", "hier", "wie", "werd",
    "altijd", "doch", "wordt", "wezen", "kunnen", "ons", "zelf", "tegen", "na", "reeds",
    "wil", "kon", "niets", "uw", "iemand", "geweest", "andere",
];

const BUILTIN_LISTS: &[(&str, &[&str])] = &[
    ("dutch", DUTCH),
    ("english", ENGLISH),
    ("french", FRENCH),
    ("german", GERMAN),
    ("italian", ITALIAN),
    ("portuguese", PORTUGUESE),
    ("spanish", SPANISH),
];

static GLOBAL_CACHE: LazyLock<StopwordCache> = LazyLock::new(StopwordCache::builtin);

static DIRECTORY_CACHES: LazyLock<RwLock<AHashMap<PathBuf, Arc<StopwordCache>>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

/// Names of the languages with a built-in stopword list, sorted.
pub fn builtin_languages() -> impl Iterator<Item = &'static str> {
    BUILTIN_LISTS.iter().map(|(name, _)| *name)
}

/// Where stopword lists are loaded from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StopwordSource {
    /// Only the lists compiled into the crate.
    #[default]
    Builtin,
    /// A directory holding one `<language>` file per list, consulted before
    /// the built-in lists.
    Directory(PathBuf),
}

impl StopwordSource {
    /// Load the list for an already normalized language name.
    fn load(&self, language: &str) -> Result<AHashSet<String>> {
        if let StopwordSource::Directory(dir) = self {
            let path = dir.join(language);
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    debug!(
                        "loaded stopwords for '{language}' from {}",
                        path.display()
                    );
                    return Ok(parse_word_list(&contents));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(WordFreqError::configuration(format!(
                        "stopword list for language '{language}' could not be read from {}: {e}",
                        path.display()
                    )));
                }
            }
        }

        BUILTIN_LISTS
            .iter()
            .find(|(name, _)| *name == language)
            .map(|(_, words)| {
                debug!("using built-in stopwords for '{language}'");
                words.iter().map(|w| w.to_string()).collect()
            })
            .ok_or_else(|| WordFreqError::unknown_language(language))
    }
}

/// Parse a one-word-per-line list, skipping blank lines.
fn parse_word_list(contents: &str) -> AHashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Normalize a language name: trimmed, lowercase, and restricted to
/// characters that cannot escape a stopword directory.
fn normalize_language(language: &str) -> Result<String> {
    let normalized = language.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(WordFreqError::configuration("language must not be empty"));
    }
    if !normalized
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(WordFreqError::unknown_language(language));
    }
    Ok(normalized)
}

/// Memoizing, thread-safe accessor for stopword sets keyed by language.
///
/// Each language is loaded at most once per cache; later lookups share the
/// same `Arc`.
#[derive(Debug, Default)]
pub struct StopwordCache {
    source: StopwordSource,
    lists: RwLock<AHashMap<String, StopwordSet>>,
}

impl StopwordCache {
    /// Create a cache over the given source.
    pub fn new(source: StopwordSource) -> Self {
        StopwordCache {
            source,
            lists: RwLock::new(AHashMap::new()),
        }
    }

    /// Create a cache over the built-in lists only.
    pub fn builtin() -> Self {
        Self::new(StopwordSource::Builtin)
    }

    /// The process-wide cache over the built-in lists.
    pub fn global() -> &'static StopwordCache {
        &GLOBAL_CACHE
    }

    /// The process-wide cache for a stopword directory.
    ///
    /// Every caller passing the same path shares one cache, so each list in
    /// the directory is read at most once per process.
    pub fn for_directory<P: Into<PathBuf>>(dir: P) -> Arc<StopwordCache> {
        let dir = dir.into();
        if let Some(cache) = DIRECTORY_CACHES.read().get(&dir) {
            return Arc::clone(cache);
        }

        let mut caches = DIRECTORY_CACHES.write();
        let cache = caches
            .entry(dir.clone())
            .or_insert_with(|| Arc::new(StopwordCache::new(StopwordSource::Directory(dir))));
        Arc::clone(cache)
    }

    /// Get the stopword set for a language, loading it on first use.
    pub fn get(&self, language: &str) -> Result<StopwordSet> {
        let key = normalize_language(language)?;

        if let Some(set) = self.lists.read().get(&key) {
            return Ok(Arc::clone(set));
        }

        let loaded = Arc::new(self.source.load(&key)?);
        let mut lists = self.lists.write();
        // Another thread may have loaded the same list meanwhile; keep the first.
        let set = lists.entry(key).or_insert(loaded);
        Ok(Arc::clone(set))
    }

    /// Number of languages loaded so far.
    pub fn loaded_count(&self) -> usize {
        self.lists.read().len()
    }
}
