use super::detect_language;
use super::extract_topic;
use super::is_tutorial_request;

#[test]
fn it_flags_teaching_keywords() {
    assert!(is_tutorial_request("教我怎么写递归函数"));
    assert!(is_tutorial_request("我想学习Rust"));
    assert!(is_tutorial_request("如何实现一个链表？"));
}

#[test]
fn it_ignores_smalltalk() {
    assert!(!is_tutorial_request("你好呀"));
    assert!(!is_tutorial_request("今天天气不错"));
    assert!(!is_tutorial_request(""));
}

#[test]
fn it_stays_true_when_text_is_appended() {
    let message = "教我指针";
    assert!(is_tutorial_request(message));
    assert!(is_tutorial_request(&format!("{message}，谢谢！")));
    assert!(is_tutorial_request(&format!("{message} please, with examples")));
}

#[test]
fn it_extracts_catalogue_topics() {
    assert_eq!(extract_topic("我想学Python", None), "Python");
    assert_eq!(extract_topic("Docker容器怎么用", None), "Docker");
    assert_eq!(extract_topic("讲讲数据结构", None), "数据结构");
}

#[test]
fn it_prefers_earlier_catalogue_entries() {
    // JavaScript is declared before Java and contains it as a substring.
    assert_eq!(extract_topic("JavaScript和Java的区别", None), "JavaScript");
    assert_eq!(extract_topic("比较一下Python和SQL", None), "Python");
}

#[test]
fn it_is_case_sensitive_on_the_catalogue() {
    // The catalogue match requires the canonical casing; lowercase input
    // falls through to the teaching-verb pattern or the fallback.
    assert_eq!(extract_topic("我想学python", None), "编程");
}

#[test]
fn it_extracts_a_topic_hint_between_markers() {
    assert_eq!(extract_topic("教闭包的用法", None), "闭包");
    // The pattern is a quirk keeper: a pronoun right after the verb is
    // captured verbatim.
    assert_eq!(extract_topic("教我怎么写递归", None), "我");
}

#[test]
fn it_falls_back_to_the_default_topic() {
    assert_eq!(extract_topic("随便聊聊", None), "编程");
    assert_eq!(extract_topic("随便聊聊", Some("算法入门")), "算法入门");
    assert_eq!(extract_topic("", None), "编程");
}

#[test]
fn it_detects_languages_from_keywords() {
    assert_eq!(detect_language("写个python爬虫"), "python");
    assert_eq!(detect_language("C++的模板怎么用"), "c++");
    assert_eq!(detect_language("golang的goroutine"), "go");
    assert_eq!(detect_language("学习rust所有权"), "rust");
    assert_eq!(detect_language("指针是什么"), "c");
}

#[test]
fn it_prefers_earlier_language_entries() {
    // javascript is declared before java, so its keyword list is consulted
    // first even though "javascript" contains "java".
    assert_eq!(detect_language("javascript教程"), "javascript");
    assert_eq!(detect_language("java教程"), "java");
}

#[test]
fn it_always_returns_a_tag() {
    assert_eq!(detect_language(""), "javascript");
    assert_eq!(detect_language("完全不相关的话"), "javascript");
}
