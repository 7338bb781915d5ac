//! Print stylesheet for the one-page resume (US letter).

pub const RESUME_CSS: &str = r#"
@page { size: letter; margin: 0; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: 'Calibri', 'Arial', sans-serif;
  font-size: 9pt;
  line-height: 1.3;
  color: #000000;
  padding: 0.35in 0.5in;
  max-width: 8.5in;
}
h1 {
  font-size: 18pt;
  font-weight: bold;
  margin-bottom: 2pt;
  text-transform: uppercase;
  letter-spacing: 0.5pt;
}
h2 {
  font-size: 11pt;
  font-weight: bold;
  margin-top: 8pt;
  margin-bottom: 4pt;
  border-bottom: 1.5pt solid #333333;
  padding-bottom: 2pt;
  text-transform: uppercase;
}
.title { font-size: 11pt; color: #333333; font-weight: 600; margin-bottom: 3pt; }
.contact {
  font-size: 8.5pt;
  color: #333333;
  margin-bottom: 1pt;
  display: flex;
  justify-content: space-between;
}
.contact a { color: #000000; text-decoration: underline; }
.summary { margin-top: 6pt; margin-bottom: 6pt; text-align: justify; }
.section-spacing { margin-bottom: 6pt; }
.job-title { font-size: 10pt; font-weight: bold; margin-top: 4pt; }
.company { color: #333333; font-weight: 600; margin-bottom: 1pt; }
.description { margin-bottom: 3pt; }
.achievements-list { margin-left: 15pt; margin-top: 2pt; margin-bottom: 4pt; }
.achievement { font-size: 8.5pt; line-height: 1.25; margin-bottom: 1.5pt; list-style-type: disc; }
.degree { font-size: 10pt; font-weight: bold; margin-top: 4pt; }
.institution { color: #333333; font-weight: 600; margin-bottom: 1pt; }
.skills-container { margin-top: 4pt; line-height: 2; }
.skill {
  display: inline-block;
  font-size: 8.5pt;
  background-color: #F3F4F6;
  padding: 2pt 8pt;
  margin: 2pt 3pt;
  border-radius: 8pt;
  border: 0.5pt solid #D1D5DB;
}
"#;
