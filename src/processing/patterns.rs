//! Static tables and pattern sources used by extraction and scoring.
//!
//! Everything here is data: marker lists, vocabularies and regex sources.
//! Logic lives in the modules that compile and apply them.

/// Phrases whose presence in a sentence marks it as stating a requirement.
pub const IMPORTANCE_MARKERS: &[&str] = &[
    "required",
    "requirements",
    "must have",
    "essential",
    "necessary",
    "qualification",
    "experience",
    "skill",
    "proficiency",
    "expertise",
    "background",
    "knowledge",
    "ability",
    "capable",
    "proficient",
];

/// Experience durations such as `5+ years` or `3 yrs`, taken verbatim.
pub const DURATION_PATTERN: &str = r"\d+\+?\s*(?:years?|yrs?)";

/// Experience fact; group 1 is the number or range.
pub const EXPERIENCE_PATTERN: &str =
    r"(?i)\b(\d+[\+]?\s*-?\s*\d*)\s*(?:years?|yrs?)\s+(?:of\s+)?(?:experience|exp)\b";

/// Work arrangement words, matched case-insensitively.
pub const WORK_ARRANGEMENT_PATTERN: &str = r"(?i)\b(?:remote|hybrid|on-site|onsite)\b";

/// Place-like phrases. Case sensitive; over-matches capitalized runs.
pub const LOCATION_PATTERN: &str = r"\b(?:remote|hybrid|on-site|onsite)\b|\b[A-Z][a-zA-Z\s]+(?:,\s*[A-Z]{2})?\b|\b[A-Z]{2},\s*USA\b|\b(?:United States|Canada|UK|Australia|New Zealand|India)\b";

/// Arrangements that never count as a location on their own.
pub const NON_LOCATION_ARRANGEMENTS: &[&str] = &["hybrid", "on-site", "onsite"];

pub const SALARY_PATTERN: &str = r"\$\s*(?:\d{1,3},)*\d{1,3}(?:k|K)?\s*(?:-\s*\$\s*(?:\d{1,3},)*\d{1,3}(?:k|K)?)?(?:\s*/\s*(?:year|yr|month|mo|annual|annually))?";

pub const EDUCATION_PATTERN: &str = r"(?i)\b(?:Bachelor'?s?|Master'?s?|PhD|BS|MS|BA|MBA|MD)\b";

/// Default skill vocabulary for fact extraction and word-cloud emphasis.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python", "Java", "JavaScript", "React", "AWS", "SQL", "Docker", "Kubernetes", "Azure",
    "Git", "REST", "API", "ML", "AI", "Node.js", "TypeScript", "Angular", "Vue.js", "PHP",
    "C++", "Swift", "Kotlin", "Ruby", "Go", "Rust", "HTML", "CSS", "MongoDB", "PostgreSQL",
    "MySQL",
];

/// Tokens for the similarity vectorizer: two or more word characters.
pub const VECTOR_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// English stop words shared by the annotator and the vectorizer.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg", "eight",
    "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found",
    "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt",
    "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie", "if",
    "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "keep", "last",
    "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile",
    "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must",
    "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next", "nine",
    "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off",
    "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please",
    "put", "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious",
    "several", "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "thick", "thin", "third", "this", "those",
    "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Technology, soft-skill and role vocabulary for the keyword matcher.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    // Languages
    "rust", "python", "javascript", "typescript", "java", "c++", "c#", "golang", "ruby",
    "php", "swift", "kotlin", "scala", "haskell", "matlab",
    // Web
    "react", "vue", "angular", "svelte", "html", "css", "tailwind", "node.js", "express",
    "next.js", "webpack",
    // Infrastructure
    "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins",
    "ci/cd", "devops", "microservices", "rest", "graphql", "grpc", "redis", "kafka",
    "elasticsearch", "nginx", "linux", "git",
    // Data
    "sql", "postgresql", "mysql", "mongodb", "dynamodb", "sqlite", "spark", "hadoop",
    "airflow", "machine learning", "deep learning", "tensorflow", "pytorch", "pandas",
    "numpy",
    // Practice
    "agile", "scrum", "tdd", "testing", "unit testing",
    // Soft skills
    "leadership", "communication", "teamwork", "problem solving", "collaboration",
    "mentoring", "project management", "stakeholder management",
    // Roles
    "software engineer", "developer", "architect", "full stack", "frontend", "backend",
    "data scientist", "product manager",
];
