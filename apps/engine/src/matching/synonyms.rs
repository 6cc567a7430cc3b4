//! Static technology vocabulary: the abbreviation/expansion synonym table
//! and the common-technology presence list.
//!
//! Process-wide read-only data. Matching code receives it by reference;
//! nothing here is mutated after startup.

/// Technology abbreviations and their accepted surface forms. Registered in
/// both directions when building a variation map: a required skill "js" picks
/// up "javascript", and a required skill "javascript" picks up "js".
pub static TECH_SYNONYMS: &[(&str, &[&str])] = &[
    ("js", &["javascript"]),
    ("ts", &["typescript"]),
    ("py", &["python"]),
    ("react", &["reactjs", "react.js", "react js"]),
    ("react native", &["reactnative"]),
    ("node", &["node.js", "nodejs", "node js"]),
    ("vue", &["vuejs", "vue.js", "vue js"]),
    ("angular", &["angularjs", "angular.js", "angular js"]),
    ("ai", &["artificial intelligence"]),
    ("ml", &["machine learning"]),
    ("dl", &["deep learning"]),
    ("db", &["database"]),
    ("ui", &["user interface"]),
    ("ux", &["user experience"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("azure", &["microsoft azure"]),
    ("k8s", &["kubernetes"]),
    (
        "ci/cd",
        &[
            "ci",
            "cd",
            "continuous integration",
            "continuous deployment",
            "continuous delivery",
        ],
    ),
    (
        "oop",
        &["object oriented programming", "object-oriented programming"],
    ),
    (".net", &["dotnet", "dot net", "asp.net", "asp net"]),
    ("c#", &["csharp", "c sharp"]),
    ("java", &["java programming", "core java"]),
    ("nlp", &["natural language processing"]),
];

/// Well-known technologies presence-tested against a job description when
/// deriving a skill list from free text.
pub static COMMON_TECH: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "C++",
    "Ruby",
    "PHP",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Express",
    "AWS",
    "Azure",
    "GCP",
    "SQL",
    "NoSQL",
    "MongoDB",
];

/// Looks up the expansions registered for an abbreviation.
pub fn expansions_of(abbreviation: &str) -> Option<&'static [&'static str]> {
    TECH_SYNONYMS
        .iter()
        .find(|(key, _)| *key == abbreviation)
        .map(|(_, expansions)| *expansions)
}
