use crate::Locale;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

type Messages = HashMap<&'static str, &'static str>;

static CATALOG: LazyLock<HashMap<Locale, Messages>> = LazyLock::new(|| {
    HashMap::from([
        (Locale::EnUs, EN_US.iter().copied().collect()),
        (Locale::ZhCn, ZH_CN.iter().copied().collect()),
    ])
});

/// Translate a key for a given locale. Missing keys come back unchanged.
pub fn translate(key: &str, locale: Locale) -> &str {
    CATALOG
        .get(&locale)
        .and_then(|messages| messages.get(key).copied())
        .unwrap_or(key)
}

/// Like [`translate`] for a locale code that may not name a known locale.
pub fn translate_code<'a>(key: &'a str, code: &str) -> &'a str {
    match Locale::from_code(code) {
        Some(locale) => translate(key, locale),
        None => key,
    }
}

/// Every key/string pair of one locale, ordered by key.
pub fn entries(locale: Locale) -> BTreeMap<&'static str, &'static str> {
    CATALOG
        .get(&locale)
        .map(|messages| messages.iter().map(|(k, v)| (*k, *v)).collect())
        .unwrap_or_default()
}

/// Keys `present` translates that `absent` does not, sorted.
pub fn missing_keys(present: Locale, absent: Locale) -> Vec<&'static str> {
    let other = CATALOG.get(&absent);
    let mut missing: Vec<&'static str> = entries(present)
        .into_keys()
        .filter(|key| !other.is_some_and(|messages| messages.contains_key(key)))
        .collect();
    missing.sort_unstable();
    missing
}

const EN_US: &[(&str, &str)] = &[
    // Navigation
    ("nav.workers", "Workers"),
    ("nav.tasks", "Tasks"),
    ("nav.broker", "Broker"),
    ("nav.documentation", "Documentation"),
    ("common.total", "Total"),
    // Workers list
    ("workers.title", "Workers"),
    ("workers.worker", "Worker"),
    ("workers.status", "Status"),
    ("workers.active", "Active"),
    ("workers.processed", "Processed"),
    ("workers.failed", "Failed"),
    ("workers.succeeded", "Succeeded"),
    ("workers.retried", "Retried"),
    ("workers.load_average", "Load Average"),
    // Broker
    ("broker.title", "Broker"),
    ("broker.queue", "Queue"),
    ("broker.messages", "Messages"),
    ("broker.unacked", "Unacked"),
    ("broker.ready", "Ready"),
    ("broker.consumers", "Consumers"),
    ("broker.idle_since", "Idle since"),
    // Tasks
    ("tasks.title", "Tasks"),
    ("tasks.name", "Name"),
    ("tasks.uuid", "UUID"),
    ("tasks.state", "State"),
    ("tasks.args", "args"),
    ("tasks.kwargs", "kwargs"),
    ("tasks.result", "Result"),
    ("tasks.received", "Received"),
    ("tasks.started", "Started"),
    ("tasks.runtime", "Runtime"),
    ("tasks.worker", "Worker"),
    ("tasks.exchange", "Exchange"),
    ("tasks.routing_key", "Routing Key"),
    ("tasks.retries", "Retries"),
    ("tasks.revoked", "Revoked"),
    ("tasks.exception", "Exception"),
    ("tasks.expires", "Expires"),
    ("tasks.eta", "ETA"),
    // Worker detail
    ("worker.pool", "Pool"),
    ("worker.broker", "Broker"),
    ("worker.queues", "Queues"),
    ("worker.tasks", "Tasks"),
    ("worker.limits", "Limits"),
    ("worker.config", "Config"),
    ("worker.system", "System"),
    ("worker.other", "Other"),
    ("worker.shutdown", "Shut Down"),
    ("worker.restart_pool", "Restart Pool"),
    ("worker.refresh", "Refresh"),
    ("worker.refresh_all", "Refresh All"),
    ("worker.pool_options", "Worker pool options"),
    ("worker.broker_options", "Broker options"),
    ("worker.config_options", "Configuration options"),
    ("worker.system_stats", "System usage statistics"),
    ("worker.other_stats", "Other statistics"),
    ("worker.pool_size_control", "Pool size control"),
    ("worker.pool_size", "Pool size"),
    ("worker.grow", "Grow"),
    ("worker.shrink", "Shrink"),
    ("worker.auto_scale", "Auto scale"),
    ("worker.worker_pid", "Worker PID"),
    ("worker.prefetch_count", "Prefetch Count"),
    ("worker.queue_arguments", "Queue arguments"),
];

const ZH_CN: &[(&str, &str)] = &[
    // Navigation
    ("nav.workers", "工作节点"),
    ("nav.tasks", "任务"),
    ("nav.broker", "消息代理"),
    ("nav.documentation", "文档"),
    ("common.total", "总计"),
    // Workers list
    ("workers.title", "工作节点"),
    ("workers.worker", "工作节点"),
    ("workers.status", "状态"),
    ("workers.active", "活跃"),
    ("workers.processed", "已处理"),
    ("workers.failed", "失败"),
    ("workers.succeeded", "成功"),
    ("workers.retried", "已重试"),
    ("workers.load_average", "平均负载"),
    // Broker
    ("broker.title", "消息代理"),
    ("broker.queue", "队列"),
    ("broker.messages", "消息数"),
    ("broker.unacked", "未确认"),
    ("broker.ready", "就绪"),
    ("broker.consumers", "消费者"),
    ("broker.idle_since", "空闲起始"),
    // Tasks
    ("tasks.title", "任务"),
    ("tasks.name", "名称"),
    ("tasks.uuid", "UUID"),
    ("tasks.state", "状态"),
    ("tasks.args", "位置参数"),
    ("tasks.kwargs", "关键字参数"),
    ("tasks.result", "结果"),
    ("tasks.received", "接收时间"),
    ("tasks.started", "开始时间"),
    ("tasks.runtime", "运行时长"),
    ("tasks.worker", "工作节点"),
    ("tasks.exchange", "交换机"),
    ("tasks.routing_key", "路由键"),
    ("tasks.retries", "重试次数"),
    ("tasks.revoked", "撤销时间"),
    ("tasks.exception", "异常"),
    ("tasks.expires", "过期时间"),
    ("tasks.eta", "预计执行时间"),
    // Worker detail
    ("worker.pool", "进程池"),
    ("worker.broker", "消息代理"),
    ("worker.queues", "队列"),
    ("worker.tasks", "任务"),
    ("worker.limits", "限制"),
    ("worker.config", "配置"),
    ("worker.system", "系统"),
    ("worker.other", "其他"),
    ("worker.shutdown", "关闭"),
    ("worker.restart_pool", "重启进程池"),
    ("worker.refresh", "刷新"),
    ("worker.refresh_all", "全部刷新"),
    ("worker.pool_options", "工作进程池选项"),
    ("worker.broker_options", "消息代理选项"),
    ("worker.config_options", "配置选项"),
    ("worker.system_stats", "系统资源使用统计"),
    ("worker.other_stats", "其他统计"),
    ("worker.pool_size_control", "进程池大小控制"),
    ("worker.pool_size", "进程池大小"),
    ("worker.grow", "扩容"),
    ("worker.shrink", "缩容"),
    ("worker.auto_scale", "自动伸缩"),
    ("worker.worker_pid", "工作进程 PID"),
    ("worker.prefetch_count", "预取数量"),
    ("worker.queue_arguments", "队列参数"),
];
