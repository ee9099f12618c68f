#[cfg(test)]
#[path = "synthesizer_test.rs"]
mod tests;

use crate::domain::models::BackendHandle;
use crate::domain::models::CodeExample;
use crate::domain::models::GeneratedLesson;
use crate::domain::models::LessonStep;
use crate::domain::models::StepByStepTutorial;
use crate::domain::models::TutorialRequest;
use crate::domain::models::TutorialStep;

/// Two-stage lesson synthesis over the backend, with deterministic offline
/// templates standing in whenever a remote stage fails. Neither entry point
/// ever returns an error: a learner is never blocked on backend availability,
/// only handed lower-fidelity content.
pub struct TutorialSynthesizer {
    backend: BackendHandle,
}

impl TutorialSynthesizer {
    pub fn new(backend: BackendHandle) -> TutorialSynthesizer {
        return TutorialSynthesizer { backend };
    }

    /// Drafts a full-text explanation of the topic, then refines it into an
    /// ordered step sequence. A refined lesson with zero steps counts as a
    /// failure so the non-empty invariant holds at every exit.
    pub async fn generate_lesson(&self, topic: &str) -> GeneratedLesson {
        let draft = match self.backend.draft_tutorial(topic).await {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!(error = ?err, topic = topic, "tutorial draft failed, using the offline lesson");
                return offline_lesson(topic);
            }
        };

        match self.backend.refine_tutorial(&draft, topic).await {
            Ok(lesson) => {
                if !lesson.steps.is_empty() {
                    return lesson;
                }
                tracing::warn!(topic = topic, "refined lesson came back with no steps");
            }
            Err(err) => {
                tracing::warn!(error = ?err, topic = topic, "tutorial refinement failed");
            }
        }

        // A draft that already carries steps skipped refinement upstream and
        // can be served directly.
        if let Some(lesson) = draft.into_lesson() {
            return lesson;
        }

        return offline_lesson(topic);
    }

    /// Produces the rich walkthrough shape. Same two-tier contract: remote
    /// attempt first, offline template on any failure or an empty step list.
    pub async fn generate_tutorial(&self, request: &TutorialRequest) -> StepByStepTutorial {
        match self.backend.generate_tutorial(request).await {
            Ok(tutorial) => {
                if !tutorial.steps.is_empty() {
                    return tutorial;
                }
                tracing::warn!(topic = request.topic, "remote tutorial came back with no steps");
            }
            Err(err) => {
                tracing::warn!(error = ?err, topic = request.topic, "tutorial generation failed, using the offline template");
            }
        }

        return offline_tutorial(request);
    }
}

/// The offline/backend-down guarantee for flat lessons: a fixed 3-step lesson
/// parameterized by the topic. Pure, no I/O, never fails.
pub fn offline_lesson(topic: &str) -> GeneratedLesson {
    return GeneratedLesson {
        lesson_title: format!("{topic} 教程"),
        lesson_description: format!("学习 {topic} 的基础知识和应用场景"),
        steps: vec![
            LessonStep {
                title: format!("{topic} 基础概念"),
                description: format!("{topic} 是编程中的重要概念。本步骤将介绍它的基本用法和概念。"),
                examples: vec![
                    "// 基础示例代码\nconsole.log('这是一个基础示例');".to_string(),
                    "// 另一个基础示例\nfunction basicExample() {\n  return '这是基础示例函数';\n}"
                        .to_string(),
                ],
                tips: vec![
                    "理解基本概念是学习的第一步".to_string(),
                    "尝试修改示例代码来深入理解".to_string(),
                    "记住这些基础术语的定义".to_string(),
                ],
                initial_code: "// 在这里编写您的代码\n\n// 尝试实现基本功能".to_string(),
            },
            LessonStep {
                title: format!("{topic} 常见用法"),
                description: format!("在掌握了基础之后，让我们来学习 {topic} 的一些常见应用场景。"),
                examples: vec![
                    "// 常见用法示例\nfunction commonUsage() {\n  // 实现常见功能\n  return '这是常见用法示例';\n}"
                        .to_string(),
                ],
                tips: vec![
                    "尝试将基础知识应用到实际问题中".to_string(),
                    "这些模式在实际开发中经常使用".to_string(),
                    "理解这些用法的适用场景".to_string(),
                ],
                initial_code: "// 在这里实现常见用法\n\n// 可以基于前面的代码继续编写".to_string(),
            },
            LessonStep {
                title: format!("{topic} 进阶技巧"),
                description: format!("现在我们来探索 {topic} 的一些进阶应用技巧和优化方法。"),
                examples: vec![
                    "// 进阶示例\nfunction advancedExample() {\n  // 实现复杂功能\n  return '这是进阶示例';\n}"
                        .to_string(),
                ],
                tips: vec![
                    "这些技巧可以提升代码质量和性能".to_string(),
                    "理解原理比记忆代码更重要".to_string(),
                    "通过解决问题来掌握进阶知识".to_string(),
                ],
                initial_code: "// 在这里实现进阶功能\n\n// 可以基于前面的代码继续优化".to_string(),
            },
        ],
    };
}

/// The offline rich-tutorial template. Pointer questions get a hand-authored
/// C walkthrough; everything else gets a generic two-step template in the
/// requested language.
pub fn offline_tutorial(request: &TutorialRequest) -> StepByStepTutorial {
    if request.topic.to_lowercase().contains("指针")
        || request.user_query.to_lowercase().contains("指针")
    {
        return pointer_tutorial();
    }

    let topic = request.topic.as_str();
    let language = request
        .programming_language
        .clone()
        .unwrap_or_else(|| return "javascript".to_string());

    return StepByStepTutorial {
        title: format!("{topic} 编程指南"),
        description: format!("全面学习{topic}的核心概念和实践应用"),
        language: language.to_string(),
        concept_explanation: format!("{topic}是编程中的重要概念，掌握它将帮助你更有效地解决问题。"),
        steps: vec![
            TutorialStep {
                title: format!("1. {topic}基础"),
                explanation: format!("{topic}的基本概念和原理介绍。"),
                code_example: CodeExample {
                    title: "基础示例".to_string(),
                    explanation: "这是一个简单的示例，展示了基本用法。".to_string(),
                    language: language.to_string(),
                    code: format!("// {topic}基础示例代码\nconsole.log(\"Hello, {topic}!\");"),
                },
                exercise: None,
                tips: vec![
                    "从基础概念开始学习".to_string(),
                    "多动手实践".to_string(),
                    "理解原理比记忆代码更重要".to_string(),
                ],
            },
            TutorialStep {
                title: format!("2. {topic}进阶应用"),
                explanation: format!("如何在实际项目中应用{topic}。"),
                code_example: CodeExample {
                    title: "进阶示例".to_string(),
                    explanation: "这个示例展示了更复杂的应用场景。".to_string(),
                    language: language.to_string(),
                    code: format!(
                        "// {topic}进阶示例\nfunction advancedExample() {{\n  // 实现进阶功能\n  return \"Advanced {topic}\";\n}}"
                    ),
                },
                exercise: Some(CodeExample {
                    title: "练习".to_string(),
                    explanation: "尝试完成这个练习来巩固所学知识。".to_string(),
                    language: language.to_string(),
                    code: format!(
                        "// 完成以下练习\n// 实现一个使用{topic}的函数\n\nfunction practice() {{\n  // 在这里编写代码\n}}"
                    ),
                }),
                tips: vec![
                    "尝试解决实际问题".to_string(),
                    "查阅官方文档深入学习".to_string(),
                    "参考优秀开源项目的实现".to_string(),
                ],
            },
        ],
        additional_resources: vec![
            "官方文档".to_string(),
            "相关在线教程".to_string(),
            "推荐书籍".to_string(),
        ],
    };
}

fn pointer_tutorial() -> StepByStepTutorial {
    return StepByStepTutorial {
        title: "C语言指针完全指南".to_string(),
        description: "C语言指针是C语言的核心特性之一，本教程将帮助你从零开始掌握指针的概念和使用方法。".to_string(),
        language: "c".to_string(),
        concept_explanation: "指针是一个变量，其值为另一个变量的内存地址。通过指针，我们可以间接访问和修改内存中的数据。".to_string(),
        steps: vec![
            TutorialStep {
                title: "1. 指针的基本概念".to_string(),
                explanation: "指针是存储内存地址的变量。在C语言中，每个变量都有一个内存地址，指针通过存储这个地址来引用变量。".to_string(),
                code_example: CodeExample {
                    title: "指针声明与初始化".to_string(),
                    explanation: "这个例子展示了如何声明和初始化指针。&num获取num的内存地址，*ptr获取ptr指向的值。".to_string(),
                    language: "c".to_string(),
                    code: "#include <stdio.h>\n\nint main() {\n    int num = 10;      // 声明整型变量\n    int *ptr;          // 声明指针变量\n    \n    ptr = &num;        // 将num的地址赋给指针\n    \n    printf(\"num的值: %d\\n\", num);\n    printf(\"num的地址: %p\\n\", &num);\n    printf(\"ptr存储的地址: %p\\n\", ptr);\n    printf(\"ptr指向的值: %d\\n\", *ptr);\n    \n    return 0;\n}".to_string(),
                },
                exercise: None,
                tips: vec![
                    "指针变量的声明格式为：数据类型 *变量名".to_string(),
                    "&运算符用于获取变量的内存地址".to_string(),
                    "*运算符用于获取指针指向的值（解引用）".to_string(),
                ],
            },
            TutorialStep {
                title: "2. 指针的操作".to_string(),
                explanation: "通过指针，我们可以间接修改变量的值，这是指针的强大之处。".to_string(),
                code_example: CodeExample {
                    title: "通过指针修改变量值".to_string(),
                    explanation: "通过*ptr = 20，我们间接修改了num的值，因为ptr指向num的内存地址。".to_string(),
                    language: "c".to_string(),
                    code: "#include <stdio.h>\n\nint main() {\n    int num = 10;\n    int *ptr = &num;\n    \n    printf(\"修改前num的值: %d\\n\", num);\n    \n    *ptr = 20;  // 通过指针修改num的值\n    \n    printf(\"修改后num的值: %d\\n\", num);\n    \n    return 0;\n}".to_string(),
                },
                exercise: Some(CodeExample {
                    title: "练习：交换两个数的值".to_string(),
                    explanation: "尝试完成swap函数，使用指针交换两个整数的值。".to_string(),
                    language: "c".to_string(),
                    code: "#include <stdio.h>\n\n// 完成这个函数，使用指针交换两个整数的值\nvoid swap(int *a, int *b) {\n    // 在这里编写代码\n    \n}\n\nint main() {\n    int x = 5, y = 10;\n    printf(\"交换前: x = %d, y = %d\\n\", x, y);\n    \n    swap(&x, &y);\n    \n    printf(\"交换后: x = %d, y = %d\\n\", x, y);\n    return 0;\n}".to_string(),
                }),
                tips: vec![
                    "通过解引用操作符*可以修改指针指向的内存中的值".to_string(),
                    "在函数间传递指针可以实现对原始数据的修改".to_string(),
                    "注意指针操作时的内存安全问题".to_string(),
                ],
            },
            TutorialStep {
                title: "3. 指针与数组".to_string(),
                explanation: "在C语言中，数组名本质上是指向数组第一个元素的指针，理解这一点对掌握指针和数组的关系至关重要。".to_string(),
                code_example: CodeExample {
                    title: "指针与数组的关系".to_string(),
                    explanation: "这个例子展示了如何使用指针访问数组元素。ptr + i表示指针向后移动i个元素，*(ptr + i)获取该位置的值。".to_string(),
                    language: "c".to_string(),
                    code: "#include <stdio.h>\n\nint main() {\n    int arr[5] = {10, 20, 30, 40, 50};\n    int *ptr = arr;  // 数组名是指向第一个元素的指针\n    \n    printf(\"使用数组下标访问:\\n\");\n    for(int i = 0; i < 5; i++) {\n        printf(\"arr[%d] = %d\\n\", i, arr[i]);\n    }\n    \n    printf(\"\\n使用指针访问:\\n\");\n    for(int i = 0; i < 5; i++) {\n        printf(\"*(ptr + %d) = %d\\n\", i, *(ptr + i));\n    }\n    \n    return 0;\n}".to_string(),
                },
                exercise: None,
                tips: vec![
                    "数组名是指向数组第一个元素的常量指针".to_string(),
                    "指针算术运算考虑了数据类型的大小".to_string(),
                    "ptr + 1实际上是增加sizeof(数据类型)个字节".to_string(),
                ],
            },
        ],
        additional_resources: vec![
            "C语言程序设计（第2版）- 谭浩强".to_string(),
            "C Primer Plus（第6版）".to_string(),
            "https://www.cprogramming.com/tutorial/c/lesson6.html".to_string(),
        ],
    };
}
