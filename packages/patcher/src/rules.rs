//! Where the translation keys go in Flower's templates.

/// One piece of markup that gets a `data-i18n` attribute.
///
/// `open` is the part of the opening tag before its closing `>` and `text`
/// is the rest, starting at that `>`. The attribute is inserted between the
/// two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub open: &'static str,
    pub text: &'static str,
    pub key: &'static str,
}

impl Tag {
    pub fn needle(&self) -> String {
        format!("{}{}", self.open, self.text)
    }

    pub fn replacement(&self) -> String {
        format!(r#"{} data-i18n="{}"{}"#, self.open, self.key, self.text)
    }

    /// The English text between the tags, e.g. `Queue` for `>Queue</th>`.
    pub fn visible_text(&self) -> &'static str {
        let inner = self.text.strip_prefix('>').unwrap_or(self.text);
        inner.split('<').next().unwrap_or(inner)
    }
}

/// Tags to add to one template file.
#[derive(Debug)]
pub struct TemplateRules {
    pub file: &'static str,
    pub tags: &'static [Tag],
}

const fn tag(open: &'static str, text: &'static str, key: &'static str) -> Tag {
    Tag { open, text, key }
}

pub const TEMPLATES: &[TemplateRules] = &[
    TemplateRules {
        file: "navbar.html",
        tags: &[
            tag(r#"href="{{ reverse_url('workers') }}""#, ">Workers</a>", "nav.workers"),
            tag(r#"href="{{ reverse_url('tasks') }}""#, ">Tasks</a>", "nav.tasks"),
            tag(r#"href="{{ reverse_url('broker') }}""#, ">Broker</a>", "nav.broker"),
            tag(
                r#"href="https://flower.readthedocs.io/" target="_blank" rel="noopener""#,
                ">Documentation</a>",
                "nav.documentation",
            ),
        ],
    },
    TemplateRules {
        file: "broker.html",
        tags: &[
            tag("<th", ">Queue</th>", "broker.queue"),
            tag("<th", ">Messages</th>", "broker.messages"),
            tag("<th", ">Unacked</th>", "broker.unacked"),
            tag("<th", ">Ready</th>", "broker.ready"),
            tag("<th", ">Consumers</th>", "broker.consumers"),
            tag("<th", ">Idle since</th>", "broker.idle_since"),
        ],
    },
    TemplateRules {
        file: "workers.html",
        tags: &[
            tag("<th", ">Worker</th>", "workers.worker"),
            tag(r#"<th class="text-center""#, ">Status</th>", "workers.status"),
            tag(r#"<th class="text-center""#, ">Active</th>", "workers.active"),
            tag(r#"<th class="text-center""#, ">Processed</th>", "workers.processed"),
            tag(r#"<th class="text-center""#, ">Failed</th>", "workers.failed"),
            tag(r#"<th class="text-center""#, ">Succeeded</th>", "workers.succeeded"),
            tag(r#"<th class="text-center""#, ">Retried</th>", "workers.retried"),
            tag(r#"<th class="text-center""#, ">Load Average</th>", "workers.load_average"),
            tag("<th", ">Total</th>", "common.total"),
        ],
    },
    TemplateRules {
        file: "tasks.html",
        tags: &[
            tag("<th", ">Name</th>", "tasks.name"),
            tag("<th", ">UUID</th>", "tasks.uuid"),
            tag(r#"<th class="text-center""#, ">State</th>", "tasks.state"),
            tag("<th", ">args</th>", "tasks.args"),
            tag("<th", ">kwargs</th>", "tasks.kwargs"),
            tag("<th", ">Result</th>", "tasks.result"),
            tag(r#"<th class="text-center""#, ">Received</th>", "tasks.received"),
            tag(r#"<th class="text-center""#, ">Started</th>", "tasks.started"),
            tag(r#"<th class="text-center""#, ">Runtime</th>", "tasks.runtime"),
            tag("<th", ">Worker</th>", "tasks.worker"),
            tag("<th", ">Exchange</th>", "tasks.exchange"),
            tag("<th", ">Routing Key</th>", "tasks.routing_key"),
            tag(r#"<th class="text-center""#, ">Retries</th>", "tasks.retries"),
            tag(r#"<th class="text-center""#, ">Revoked</th>", "tasks.revoked"),
            tag("<th", ">Exception</th>", "tasks.exception"),
            tag(r#"<th class="text-center""#, ">Expires</th>", "tasks.expires"),
            tag(r#"<th class="text-center""#, ">ETA</th>", "tasks.eta"),
        ],
    },
    TemplateRules {
        file: "worker.html",
        tags: &[
            // Tabs
            tag(r#"aria-selected="true""#, ">Pool</a>", "worker.pool"),
            tag(r#"aria-selected="false""#, ">Broker</a>", "worker.broker"),
            tag(r#"aria-selected="false""#, ">Queues</a>", "worker.queues"),
            tag(r#"aria-selected="false""#, ">Tasks</a>", "worker.tasks"),
            tag(r#"aria-selected="false""#, ">Limits</a>", "worker.limits"),
            tag(r#"aria-selected="false""#, ">Config</a>", "worker.config"),
            tag(r#"aria-selected="false""#, ">System</a>", "worker.system"),
            tag(r#"aria-selected="false""#, ">Other</a>", "worker.other"),
            // Actions menu
            tag("", ">Shut Down</a>", "worker.shutdown"),
            tag("", ">Restart Pool</a>", "worker.restart_pool"),
            tag(r#"data-bs-dismiss="dropdown""#, ">Refresh</a>", "worker.refresh"),
            tag(r#"data-bs-dismiss="dropdown""#, ">Refresh All</a>", "worker.refresh_all"),
            // Captions and legends
            tag("<caption", ">Worker pool options</caption>", "worker.pool_options"),
            tag("<caption", ">Broker options</caption>", "worker.broker_options"),
            tag("<caption", ">Configuration options</caption>", "worker.config_options"),
            tag("<caption", ">System usage statistics</caption>", "worker.system_stats"),
            tag("<caption", ">Other statistics</caption>", "worker.other_stats"),
            tag(
                r#"<legend class="form-label mt-md-5""#,
                ">Pool size control</legend>",
                "worker.pool_size_control",
            ),
            // Form controls
            tag(
                r#"<label for="pool-size" class="col-sm-2 col-form-label text-nowrap""#,
                ">Pool size</label>",
                "worker.pool_size",
            ),
            tag("", ">Grow</button>", "worker.grow"),
            tag("", ">Shrink</button>", "worker.shrink"),
            tag(
                r#"<label for="min-autoscale" class="col-sm-2 form-label text-nowrap""#,
                ">Auto scale</label>",
                "worker.auto_scale",
            ),
            // Table cells
            tag("<td", ">Worker PID</td>", "worker.worker_pid"),
            tag("<td", ">Prefetch Count</td>", "worker.prefetch_count"),
            tag("<th", ">Queue arguments</th>", "worker.queue_arguments"),
        ],
    },
];

/// Apply every tag of `rules` to `content`. Returns the new text and how many
/// occurrences were tagged.
pub fn apply(rules: &TemplateRules, content: &str) -> (String, usize) {
    let mut patched = content.to_string();
    let mut hits = 0;
    for tag in rules.tags {
        let needle = tag.needle();
        let count = patched.matches(needle.as_str()).count();
        if count > 0 {
            patched = patched.replace(needle.as_str(), &tag.replacement());
            hits += count;
        }
    }
    (patched, hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::{translate, Locale};

    #[test]
    fn every_key_has_the_template_text_in_english() {
        for rules in TEMPLATES {
            for tag in rules.tags {
                assert_eq!(
                    translate(tag.key, Locale::EnUs),
                    tag.visible_text(),
                    "{} in {}",
                    tag.key,
                    rules.file
                );
            }
        }
    }

    #[test]
    fn every_key_is_translated_to_chinese() {
        for rules in TEMPLATES {
            for tag in rules.tags {
                assert_ne!(translate(tag.key, Locale::ZhCn), tag.key, "{}", tag.key);
            }
        }
    }

    #[test]
    fn inserts_attribute_before_closing_bracket() {
        let t = tag(r#"<th class="text-center""#, ">Status</th>", "workers.status");
        assert_eq!(
            t.replacement(),
            r#"<th class="text-center" data-i18n="workers.status">Status</th>"#
        );
        let bare = tag("", ">Grow</button>", "worker.grow");
        assert_eq!(bare.replacement(), r#" data-i18n="worker.grow">Grow</button>"#);
    }

    #[test]
    fn apply_tags_table_headers() {
        let broker = TEMPLATES.iter().find(|r| r.file == "broker.html").unwrap();
        let html = "<tr><th>Queue</th><th>Messages</th><th>Unknown</th></tr>";
        let (patched, hits) = apply(broker, html);
        assert_eq!(hits, 2);
        assert_eq!(
            patched,
            r#"<tr><th data-i18n="broker.queue">Queue</th><th data-i18n="broker.messages">Messages</th><th>Unknown</th></tr>"#
        );
    }

    #[test]
    fn apply_tags_buttons_with_attributes() {
        let worker = TEMPLATES.iter().find(|r| r.file == "worker.html").unwrap();
        let html = r#"<button type="button" class="btn btn-primary" id="pool-size-grow">Grow</button>"#;
        let (patched, hits) = apply(worker, html);
        assert_eq!(hits, 1);
        assert!(patched.contains(r#"id="pool-size-grow" data-i18n="worker.grow">Grow</button>"#));
    }
}
