use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::translator::Translator;

/// Offline translator with a built-in English-Chinese glossary.
///
/// Ships in the crate because the app runs fully offline in demo mode;
/// unknown text is returned unchanged. Records every request so tests can
/// assert on the fan-out behavior.
pub struct MockTranslator {
    glossary: HashMap<&'static str, &'static str>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranslator {
    pub fn new() -> Self {
        let glossary = HashMap::from([
            ("Caesar Salad", "凯撒沙拉"),
            ("Tomato Soup", "番茄汤"),
            ("Grilled Salmon", "烤三文鱼"),
            ("Beef Ribeye Steak", "牛肋眼牛排"),
            ("Chicken Parmesan", "帕尔马干酪鸡肉"),
            ("Chocolate Cake", "巧克力蛋糕"),
            ("Apple Pie", "苹果派"),
            ("Coffee", "咖啡"),
            ("Orange Juice", "橙汁"),
            ("Fresh romaine lettuce with parmesan", "新鲜长叶莴苣配帕尔马干酪"),
            ("Creamy tomato basil soup", "奶油番茄罗勒汤"),
            ("Atlantic salmon with herbs", "大西洋三文鱼配香草"),
            ("Prime cut with garlic butter", "优质牛排配蒜蓉黄油"),
            ("Breaded chicken with marinara", "面包屑鸡肉配马林纳拉酱"),
            ("Rich chocolate layer cake", "浓郁巧克力千层蛋糕"),
            ("Traditional apple pie with cinnamon", "传统肉桂苹果派"),
            ("Freshly brewed house blend", "新鲜调制的招牌咖啡"),
            ("Freshly squeezed", "新鲜榨制"),
        ]);

        Self {
            glossary,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Texts passed to `translate` so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, _target_language: &str) -> Result<String, String> {
        self.calls.lock().push(text.to_string());

        Ok(self
            .glossary
            .get(text)
            .map(|t| t.to_string())
            .unwrap_or_else(|| text.to_string()))
    }
}
