//! Template file contents

/// Express server bootstrap
pub const APP_JS: &str = r"const express = require('express');
const path = require('path');
require('dotenv').config();

const app = express();
const port = process.env.PORT || 3000;

app.use(express.json());
app.use(express.urlencoded({ extended: true }));
app.use(express.static(path.join(__dirname, 'public')));

require('./models/db');
const indexRoutes = require('./routes/index');
app.use('/', indexRoutes);

app.listen(port, () => {
  console.log(`🚀 Server running on http://localhost:${port}`);
});
";

/// Root router
pub const ROUTES_INDEX: &str = r"const express = require('express');
const router = express.Router();
const HomeController = require('../controllers/HomeController');

router.get('/', HomeController.index);

module.exports = router;
";

/// Home page controller
pub const HOME_CONTROLLER: &str = r"const path = require('path');

exports.index = (req, res) => {
  res.sendFile(path.join(__dirname, '../views/index.html'));
};
";

/// Datastore-agnostic user model
pub const USER_MODEL: &str = r"class User {
  constructor({ id = null, name = '', email = '' } = {}) {
    this.id = id;
    this.name = name;
    this.email = email;
  }

  validate() {
    const errors = [];
    if (!this.name.trim()) {
      errors.push('name is required');
    }
    if (!/^[^@\s]+@[^@\s]+$/.test(this.email)) {
      errors.push('email is invalid');
    }
    return errors;
  }

  toJSON() {
    return { id: this.id, name: this.name, email: this.email };
  }
}

module.exports = User;
";

/// Welcome page
pub const VIEW_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome to Express MVC</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <div class="container">
        <h1>Welcome to Express MVC</h1>
        <p>This is a simple MVC structure for Express.js</p>
        <a href="https://expressjs.com/">Read the Documentation</a>
    </div>
    <script src="/js/main.js"></script>
</body>
</html>
"#;

/// Stylesheet for the welcome page
pub const STYLE_CSS: &str = r"body {
    font-family: Arial, sans-serif;
    text-align: center;
    background-color: #f4f4f4;
    padding: 50px;
}

.container {
    background: white;
    padding: 20px;
    border-radius: 10px;
    box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1);
    display: inline-block;
}
";

/// Client-side script for the welcome page
pub const MAIN_JS: &str = r"document.addEventListener('DOMContentLoaded', () => {
  console.log('Express MVC app loaded');
});
";

/// `.gitignore` for generated projects
pub const GITIGNORE: &str = r"node_modules/
.env
npm-debug.log*
";

/// `.env` for `MySQL` projects
pub const ENV_MYSQL: &str = r"DB_HOST=localhost
DB_PORT=3306
DB_NAME={{database_name}}
DB_USER=root
DB_PASS=password
PORT=3000
";

/// `.env` for `MongoDB` projects
pub const ENV_MONGO: &str = r"MONGO_URI=mongodb://localhost:27017/{{database_name}}
PORT=3000
";

/// Sequelize connection module
pub const DB_CONNECTOR_MYSQL: &str = r"const { Sequelize } = require('sequelize');
require('dotenv').config();

const sequelize = new Sequelize(process.env.DB_NAME, process.env.DB_USER, process.env.DB_PASS, {
  host: process.env.DB_HOST,
  port: process.env.DB_PORT,
  dialect: 'mysql'
});

sequelize.authenticate()
  .then(() => console.log('✅ Connected to MySQL successfully'))
  .catch(err => console.error('❌ Unable to connect to MySQL:', err));

module.exports = sequelize;
";

/// Mongoose connection module
pub const DB_CONNECTOR_MONGO: &str = r"const mongoose = require('mongoose');
require('dotenv').config();

mongoose.connect(process.env.MONGO_URI)
  .then(() => console.log('✅ Connected to MongoDB successfully'))
  .catch(err => console.error('❌ MongoDB connection error:', err));

module.exports = mongoose;
";
