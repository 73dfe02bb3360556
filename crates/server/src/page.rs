use std::fmt::Write as _;

use dashboard_api::{
    layout::{CHOROPLETH_MAP, COUNTRY_WINS, YEAR_RESULT},
    DashboardLayout, Dropdown, BINDINGS,
};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// Wires each binding: on input change, fetch its route and swap the output.
const CALLBACK_SCRIPT: &str = r#"
(function () {
  const read = (id) => JSON.parse(document.getElementById(id).textContent);
  const bindings = read("dashboard-bindings");
  const initial = read("choropleth-map-figure");
  if (initial) {
    Plotly.react("choropleth-map", initial.data, initial.layout);
  }
  for (const binding of bindings) {
    const input = document.getElementById(binding.input);
    let latest = 0;
    input.addEventListener("change", async (event) => {
      const ticket = ++latest;
      const query = new URLSearchParams({ [binding.param]: event.target.value });
      const target = document.getElementById(binding.output);
      let response;
      let body;
      try {
        response = await fetch(binding.route + "?" + query);
        body = await response.json();
      } catch (err) {
        if (ticket === latest) {
          target.textContent = String(err);
        }
        return;
      }
      // a newer selection was made while this one was in flight
      if (ticket !== latest) {
        return;
      }
      if (!response.ok) {
        if (binding.kind === "figure") {
          Plotly.purge(target);
        }
        target.textContent = body.message;
        return;
      }
      if (binding.kind === "figure") {
        Plotly.react(target, body.data, body.layout);
      } else {
        target.textContent = body.text;
      }
    });
  }
})();
"#;

pub(crate) fn render_page(layout: &DashboardLayout) -> Result<String, serde_json::Error> {
    let bindings = script_json(&serde_json::to_string(&BINDINGS)?);
    let figure = script_json(&serde_json::to_string(&layout.figure)?);
    let title = escape_html(layout.title);

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<script src=\"{PLOTLY_JS}\"></script>");
    html.push_str("</head>\n<body>\n<div>\n");

    let _ = writeln!(html, "<h1>{title}</h1>");

    push_dropdown(&mut html, &layout.country);
    push_output(&mut html, layout.country.id, &layout.country_wins, COUNTRY_WINS);

    push_dropdown(&mut html, &layout.year);
    push_output(&mut html, layout.year.id, &layout.year_result, YEAR_RESULT);

    let _ = writeln!(html, "<div id=\"{CHOROPLETH_MAP}\"></div>");

    html.push_str("<div style=\"margin-top: 30px; margin-bottom: 20px\">\n");
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(layout.winners_heading));
    html.push_str("<ul>\n");
    for country in &layout.winners {
        let _ = writeln!(html, "<li>{}</li>", escape_html(country));
    }
    html.push_str("</ul>\n</div>\n</div>\n");

    let _ = writeln!(
        html,
        "<script type=\"application/json\" id=\"dashboard-bindings\">{bindings}</script>"
    );
    let _ = writeln!(
        html,
        "<script type=\"application/json\" id=\"{CHOROPLETH_MAP}-figure\">{figure}</script>"
    );
    let _ = writeln!(html, "<script>{CALLBACK_SCRIPT}</script>");
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn push_dropdown(html: &mut String, dropdown: &Dropdown) {
    let _ = writeln!(
        html,
        "<label for=\"{}\">{}</label>",
        dropdown.id,
        escape_html(dropdown.label)
    );
    let _ = writeln!(html, "<select id=\"{}\">", dropdown.id);
    for option in &dropdown.options {
        let selected = if dropdown.value.as_deref() == Some(option.value.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape_html(&option.value),
            escape_html(&option.label)
        );
    }
    html.push_str("</select>\n");
}

fn push_output(html: &mut String, input: &str, text: &str, output: &str) {
    let _ = writeln!(
        html,
        "<div id=\"{output}\" data-input=\"{input}\">{}</div>",
        escape_html(text)
    );
}

/// JSON inside a `<script>` block must not contain a closing tag.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
