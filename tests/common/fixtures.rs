//! Test fixtures - reusable page content for tests.

/// Page with only the anchor pair and the legacy stylesheet
pub const ANCHOR_ONLY_PAGE: &str = r#"<!DOCTYPE html>
<html data-wf-page="home">
<head>
  <meta charset="utf-8">
  <title>Home</title>
  <link href="/assets/css/normalize.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/webflow.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/checkie-stage.webflow.css" rel="stylesheet" type="text/css">
  <script src="/assets/js/webfont.js" type="text/javascript"></script>
</head>
<body>
  <h1>Home</h1>
</body>
</html>
"#;

/// The same page after insertion: canonical order
pub const DESIGN_SYSTEM_PAGE: &str = r#"<!DOCTYPE html>
<html data-wf-page="home">
<head>
  <meta charset="utf-8">
  <title>Home</title>
  <link href="/assets/css/normalize.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/webflow.css" rel="stylesheet" type="text/css">
  <!-- Stripe Design System -->
  <link href="/assets/css/design-system/tokens.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/base.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/utilities.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/components.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/legacy-compat.css" rel="stylesheet" type="text/css">
  <!-- Legacy styles (will be gradually removed) -->
  <link href="/assets/css/checkie-stage.webflow.css" rel="stylesheet" type="text/css">
  <script src="/assets/js/webfont.js" type="text/javascript"></script>
</head>
<body>
  <h1>Home</h1>
</body>
</html>
"#;

/// Design-system stylesheets loaded before the legacy tail in the wrong order
pub const OUT_OF_ORDER_PAGE: &str = r#"<!DOCTYPE html>
<html data-wf-page="home">
<head>
  <meta charset="utf-8">
  <title>Home</title>
  <link href="/assets/css/normalize.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/tokens.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/webflow.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/design-system/components.css" rel="stylesheet" type="text/css">
  <link href="/assets/css/checkie-stage.webflow.css" rel="stylesheet" type="text/css">
  <script src="/assets/js/webfont.js" type="text/javascript"></script>
</head>
<body>
  <h1>Home</h1>
</body>
</html>
"#;

/// A page that never had the expected stylesheets
pub const UNRELATED_PAGE: &str = "<html><head><title>Plain</title></head><body></body></html>\n";
