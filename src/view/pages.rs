pub fn about() -> String {
    [
        "About EduLearn",
        "",
        "EduLearn is a demo course catalog. Courses come from public APIs",
        "(Open Library, then JSONPlaceholder) or, when neither answers, from",
        "built-in demo data. Accounts are local to this machine and are not",
        "verified in any way.",
    ]
    .join("\n")
}

pub fn contact() -> String {
    [
        "Contact",
        "",
        "Email:   support@edulearn.example",
        "Phone:   +1 (555) 010-2024",
        "Address: 123 Learning Lane, Knowledge City",
    ]
    .join("\n")
}

pub fn not_found(what: &str) -> String {
    format!("404: {} not found. Back to the course list with 'c'.", what)
}
