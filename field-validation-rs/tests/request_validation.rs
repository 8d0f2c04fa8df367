use field_validation_rs::prelude::*;
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::thread;

lazy_static! {
    static ref CREATE_CATEGORY: InputConstraintSpec = InputConstraintSpec::builder()
        .tagged("uri", "URI", "required,max=64,startswith=/")
        .tagged("name", "栏目名称", "required,max=20")
        .tagged("title", "标题", "omitempty,max=255")
        .tagged("is_required_picture", "是否必须图片", "required,oneof=1 2")
        .tagged("picture", "图片", "omitempty,url")
        .tagged("is_enable", "启用", "required,oneof=1 2")
        .build();

    static ref CREATE_ADMIN: InputConstraintSpec = InputConstraintSpec::builder()
        .tagged("username", "用户名", "required,username")
        .tagged("nickname", "昵称", "required,max=32")
        .tagged("mobile", "手机号", "required,mobile")
        .tagged("password", "密码", "required,password")
        .tagged("role", "角色", "required,snowflake")
        .tagged("dir", "目录", "omitempty,dir")
        .build();
}

#[derive(Serialize)]
struct CreateAdmin {
    username: String,
    nickname: String,
    mobile: String,
    password: String,
    role: u64,
    dir: Option<String>,
}

fn context() -> ValidationContext {
    ValidationContextBuilder::new().build()
}

#[test]
fn valid_category_passes() {
    let context = context();
    let input = json!({
        "uri": "/news",
        "name": "新闻",
        "title": "News",
        "is_required_picture": 2,
        "picture": "https://example.com/a.png",
        "is_enable": 1
    });

    context.check_spec(&CREATE_CATEGORY).unwrap();
    assert!(context.validate_full(&input, &CREATE_CATEGORY).unwrap().is_valid());
}

#[test]
fn first_message_uses_declaration_order() {
    let context = context();
    let input = json!({
        "uri": "news",
        "name": "",
        "is_required_picture": 3,
        "is_enable": 1
    });

    let result = context.validate_first(&input, &CREATE_CATEGORY).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(
        context.translate_first(&result, "zh").unwrap(),
        "URI必须以文本'/'开头"
    );
    assert_eq!(
        context.translate_first(&result, "en").unwrap(),
        "URI must start with text '/'"
    );
}

#[test]
fn full_messages_group_by_field() {
    let context = context();
    let input = json!({
        "uri": "news/".repeat(20),
        "name": "一个非常非常非常非常非常非常长的栏目名称啊",
        "is_required_picture": 1,
        "is_enable": 0
    });

    let result = context.validate_full(&input, &CREATE_CATEGORY).unwrap();
    let messages = context.translate_all(&result, "zh").unwrap();

    assert_eq!(
        messages["uri"],
        vec![
            "URI长度不能超过64个字符".to_string(),
            "URI必须以文本'/'开头".to_string(),
        ]
    );
    assert_eq!(messages["name"], vec!["栏目名称长度不能超过20个字符".to_string()]);
    assert_eq!(messages["is_enable"], vec!["启用必须是[1 2]中的一个".to_string()]);
    assert!(!messages.contains_key("title"));

    for (field, list) in &messages {
        assert!(CREATE_CATEGORY.field(field).is_some());
        assert!(!list.is_empty());
    }
}

#[test]
fn custom_rules_render_original_messages() {
    let context = context();
    let admin = CreateAdmin {
        username: "ad".into(),
        nickname: "Admin".into(),
        mobile: "12800138000".into(),
        password: "pass word".into(),
        role: 1,
        dir: None,
    };
    let input = SerializedInput::new(&admin).unwrap();

    let result = context.validate_full(&input, &CREATE_ADMIN).unwrap();
    let messages = context.translate_all(&result, "zh").unwrap();

    assert_eq!(messages["username"], vec!["请输入 4-20 位的英文字母数字以及 -_ 等字符".to_string()]);
    assert_eq!(messages["mobile"], vec!["手机号格式错误".to_string()]);
    assert_eq!(
        messages["password"],
        vec!["请输入 6-32 位的英文字母数字以及 -_@$&%! 等特殊字符".to_string()]
    );
    assert_eq!(messages.len(), 3);

    let english = context.translate_all(&result, "en").unwrap();
    assert_eq!(english["mobile"], vec!["invalid mobile number format".to_string()]);
}

#[test]
fn missing_fields_fail_required() {
    let context = context();
    let result = context
        .validate_first(&json!({ "username": "editor" }), &CREATE_ADMIN)
        .unwrap();

    let rules: Vec<(&str, &str)> = result
        .iter()
        .map(|v| (v.field.as_str(), v.rule.as_str()))
        .collect();
    assert_eq!(
        rules,
        vec![
            ("nickname", "required"),
            ("mobile", "required"),
            ("password", "required"),
            ("role", "required"),
        ]
    );
    assert_eq!(context.translate_first(&result, "en").unwrap(), "昵称 is a required field");
}

#[test]
fn missing_field_without_omitempty_is_required() {
    let context = context();
    let spec = InputConstraintSpec::builder().tagged("dir", "目录", "dir").build();

    let result = context.validate_first(&json!({}), &spec).unwrap();
    assert_eq!(context.translate_first(&result, "zh").unwrap(), "目录为必填字段");

    let result = context.validate_first(&json!({ "dir": "" }), &spec).unwrap();
    assert_eq!(context.translate_first(&result, "zh").unwrap(), "文件夹格式错误");
}

#[test]
fn empty_result_cannot_render_first_message() {
    let context = context();
    let result = context
        .validate_first(&json!({ "title": "News" }), &InputConstraintSpec::default())
        .unwrap();

    assert!(result.is_valid());
    assert_eq!(context.translate_first(&result, "en"), Err(EngineError::EmptyResult));
    assert!(context.translate_all(&result, "en").unwrap().is_empty());
}

#[test]
fn concurrent_validation_shares_context() {
    let context = Arc::new(context());
    let inputs = vec![
        json!({ "username": "editor", "nickname": "Ed", "mobile": "13800138000", "password": "secret!", "role": "42" }),
        json!({ "username": "ed", "nickname": "Ed", "mobile": "13800138000", "password": "secret!", "role": "42" }),
    ];

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let context = Arc::clone(&context);
                let input = &inputs[i % 2];
                scope.spawn(move || context.validate_full(input, &CREATE_ADMIN).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(result.is_valid(), i % 2 == 0);
        }
    });
}
