#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

// Declaration order is priority order for every table below: the first hit
// wins, so earlier entries break ties.

const TUTORIAL_KEYWORDS: [&str; 20] = [
    "教", "学习", "指导", "教程", "怎么写", "如何实现", "教我", "学会", "入门", "基础", "指针",
    "语法", "编程", "代码", "开发", "实现", "函数", "变量", "类", "对象",
];

const TOPIC_CATALOGUE: [&str; 35] = [
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "HTML",
    "CSS",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "数据结构",
    "算法",
    "设计模式",
    "函数式编程",
    "面向对象",
    "异步编程",
    "指针",
    "内存管理",
    "并发",
    "多线程",
    "网络编程",
    "数据库",
    "SQL",
    "API",
    "REST",
    "GraphQL",
    "微服务",
    "容器化",
    "Docker",
    "Kubernetes",
];

const LANGUAGE_KEYWORDS: [(&str, &[&str]); 15] = [
    ("javascript", &["javascript", "js", "node", "nodejs", "react", "vue", "angular"]),
    ("python", &["python", "py", "django", "flask", "爬虫"]),
    ("java", &["java", "spring", "android"]),
    ("c", &["c语言", "指针", "c程序"]),
    ("c++", &["c++", "cpp"]),
    ("c#", &["c#", "csharp", ".net", "dotnet"]),
    ("go", &["go", "golang"]),
    ("rust", &["rust"]),
    ("php", &["php"]),
    ("ruby", &["ruby"]),
    ("swift", &["swift", "ios"]),
    ("kotlin", &["kotlin"]),
    ("typescript", &["typescript", "ts"]),
    ("html", &["html", "css"]),
    ("sql", &["sql", "数据库", "mysql", "postgresql", "oracle"]),
];

// Captures up to ten characters between a teaching verb and a following
// manner marker, e.g. 教<主题>的 / 学<主题>怎.
static TOPIC_HINT: Lazy<Regex> =
    Lazy::new(|| return Regex::new("(?i)[教学习](.{1,10})[的怎如何]").unwrap());

/// Heuristic test for teaching/learning intent. False negatives are expected
/// and acceptable.
pub fn is_tutorial_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    return TUTORIAL_KEYWORDS
        .iter()
        .any(|keyword| return lowered.contains(keyword));
}

/// Pulls a subject of instruction out of a message. Catalogue entries are
/// matched case-sensitively in declaration order; when none hits, a pattern
/// between teaching-verb markers is tried; the fallback topic (default 编程)
/// closes the gap.
pub fn extract_topic(message: &str, fallback: Option<&str>) -> String {
    for topic in TOPIC_CATALOGUE {
        if message.contains(topic) {
            return topic.to_string();
        }
    }

    if let Some(captures) = TOPIC_HINT.captures(message) {
        if let Some(hint) = captures.get(1) {
            return hint.as_str().trim().to_string();
        }
    }

    return fallback.unwrap_or("编程").to_string();
}

/// Maps a message to a language tag. Total: any input, including the empty
/// string, lands on a member of the fixed tag set (default javascript).
pub fn detect_language(message: &str) -> String {
    let lowered = message.to_lowercase();

    for (language, keywords) in LANGUAGE_KEYWORDS {
        if keywords.iter().any(|keyword| return lowered.contains(keyword)) {
            return language.to_string();
        }
    }

    return "javascript".to_string();
}
