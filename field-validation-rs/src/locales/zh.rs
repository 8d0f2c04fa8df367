//! Simplified Chinese messages

use super::LocaleBundle;
use crate::value::ValueKind;

pub const BUNDLE: LocaleBundle = LocaleBundle {
    locale: "zh",
    messages: &[
        ("required", "{0}为必填字段"),
        ("len", "{0}长度必须是{1}"),
        ("min", "{0}最小只能为{1}"),
        ("max", "{0}必须小于或等于{1}"),
        ("gt", "{0}必须大于{1}"),
        ("gte", "{0}必须大于或等于{1}"),
        ("lt", "{0}必须小于{1}"),
        ("lte", "{0}必须小于或等于{1}"),
        ("eq", "{0}不等于{1}"),
        ("ne", "{0}不能等于{1}"),
        ("oneof", "{0}必须是[{1}]中的一个"),
        ("numeric", "{0}必须是一个有效的数值"),
        ("email", "{0}必须是一个有效的邮箱"),
        ("url", "{0}必须是一个有效的URL"),
        ("ip", "{0}必须是一个有效的IP地址"),
        ("uuid", "{0}必须是一个有效的UUID"),
        ("alpha", "{0}只能包含字母"),
        ("alphanum", "{0}只能包含字母和数字"),
        ("contains", "{0}必须包含文本'{1}'"),
        ("startswith", "{0}必须以文本'{1}'开头"),
        ("endswith", "{0}必须以文本'{1}'结尾"),
        ("mobile", "手机号格式错误"),
        ("dir", "文件夹格式错误"),
        ("username", "请输入 4-20 位的英文字母数字以及 -_ 等字符"),
        ("password", "请输入 6-32 位的英文字母数字以及 -_@$&%! 等特殊字符"),
        ("snowflake", "雪花 ID 格式错误"),
    ],
    kind_messages: &[
        ("len", ValueKind::String, "{0}长度必须是{1}个字符"),
        ("len", ValueKind::Number, "{0}必须等于{1}"),
        ("len", ValueKind::List, "{0}必须包含{1}项"),
        ("min", ValueKind::String, "{0}长度必须至少为{1}个字符"),
        ("min", ValueKind::List, "{0}必须至少包含{1}项"),
        ("max", ValueKind::String, "{0}长度不能超过{1}个字符"),
        ("max", ValueKind::List, "{0}最多只能包含{1}项"),
        ("gt", ValueKind::String, "{0}长度必须大于{1}个字符"),
        ("gt", ValueKind::List, "{0}必须大于{1}项"),
        ("gte", ValueKind::String, "{0}长度必须至少为{1}个字符"),
        ("gte", ValueKind::List, "{0}必须至少包含{1}项"),
        ("lt", ValueKind::String, "{0}长度必须小于{1}个字符"),
        ("lt", ValueKind::List, "{0}必须包含少于{1}项"),
        ("lte", ValueKind::String, "{0}长度不能超过{1}个字符"),
        ("lte", ValueKind::List, "{0}最多只能包含{1}项"),
    ],
};
