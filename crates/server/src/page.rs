//! 图片列表页面渲染。

use std::fmt::Write;

use annotator_storage::ImageEntry;

use crate::api::assets::ANNOTATION_SCRIPT_PATH;

/// 渲染图片列表页面，`selected` 为需要高亮并自动加载的图片。
pub fn render_index(images: &[ImageEntry], selected: Option<&str>) -> String {
    let mut items = String::new();
    for image in images {
        let name = escape_html(&image.name);
        let class = if selected == Some(image.name.as_str()) {
            " class=\"selected\""
        } else {
            ""
        };
        // 写入 String 不会失败
        let _ = writeln!(
            items,
            "      <li{class}><a href=\"#\" data-image=\"{name}\" onclick=\"loadImage(this.dataset.image); return false;\">{name}</a></li>"
        );
    }
    if images.is_empty() {
        items.push_str("      <li class=\"empty\">No images uploaded yet.</li>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Image Annotator</title>
</head>
<body>
  <aside>
    <form action="/upload" method="post" enctype="multipart/form-data">
      <label>Image <input type="file" name="image" accept="image/*"></label>
      <label>Annotation <input type="file" name="annotation" accept="application/json,.json"></label>
      <button type="submit">Upload</button>
    </form>
    <ul id="images">
{items}    </ul>
  </aside>
  <main>
    <button onclick="activateRect()">Rectangle</button>
    <button onclick="activatePoly()">Polygon</button>
    <button onclick="saveAnnotation()">Save</button>
    <canvas id="canvas" width="800" height="600"></canvas>
  </main>
  <script>const selectedOnLoad = {selected};</script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/fabric.js/5.3.1/fabric.min.js"></script>
  <script src="{script}"></script>
</body>
</html>
"#,
        selected = script_literal(selected),
        script = ANNOTATION_SCRIPT_PATH,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 将值编码为可安全嵌入 `<script>` 的 JS 字面量。
fn script_literal(value: Option<&str>) -> String {
    serde_json::to_string(&value)
        .unwrap_or_else(|_| "null".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
